//! # Output Module
//!
//! Writes rendered byte buffers to disk and optionally to a TEV viewer.
//!
//! The renderer produces 8-bit display values, row-major, with RGB in the
//! first three bytes of every `stride`-sized pixel. Files are encoded by the
//! `image` crate, chosen by extension: `.png`, or `.ppm` for a binary P6
//! pixmap.

use std::borrow::Cow;
use std::net::TcpStream;
use std::path::Path;

use anyhow::Context;
use image::ExtendedColorType;
use log::{debug, info, warn};
use tev_client::{PacketCreateImage, PacketUpdateImage, TevClient};

/// Drop stride padding so that every pixel is exactly three bytes.
pub fn pack_rgb(buffer: &[u8], stride: usize) -> Cow<'_, [u8]> {
    if stride == 3 {
        return Cow::Borrowed(buffer);
    }
    Cow::Owned(
        buffer
            .chunks_exact(stride)
            .flat_map(|pixel| &pixel[..3])
            .copied()
            .collect(),
    )
}

/// Save a rendered buffer as PNG or PPM, depending on the extension of
/// `output_path`.
pub fn save_image(
    buffer: &[u8],
    stride: usize,
    output_path: &str,
    width: u32,
    height: u32,
) -> anyhow::Result<()> {
    let rgb = pack_rgb(buffer, stride);
    image::save_buffer(Path::new(output_path), &rgb, width, height, ExtendedColorType::Rgb8)
        .with_context(|| format!("failed to save image to {output_path}"))?;
    info!("Image saved as {}", output_path);
    Ok(())
}

/// Convert an 8-bit sRGB value to linear light for TEV.
fn srgb_to_linear(value: u8) -> f32 {
    let encoded = f32::from(value) / 255.0;
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// Send a rendered buffer to TEV for visualization.
///
/// TEV expects linear floating point channels in planar layout, so the bytes
/// are linearized and split into R, G and B planes. Connection or protocol
/// failures are logged and otherwise ignored.
pub fn send_image_to_tev(buffer: &[u8], stride: usize, tev_address: &str, width: u32, height: u32) {
    // Add default port if not specified
    let tev_address = if tev_address.contains(':') {
        tev_address.to_string()
    } else {
        format!("{}:14158", tev_address)
    };

    debug!("Attempting to connect to TEV at {}", tev_address);

    let stream = match TcpStream::connect(&tev_address) {
        Ok(stream) => stream,
        Err(e) => {
            warn!("Failed to connect to TEV on {}: {}", tev_address, e);
            return;
        }
    };
    if let Err(e) = stream.set_nodelay(true) {
        debug!("Failed to set TCP_NODELAY: {}", e);
    }
    let mut client = TevClient::wrap(stream);

    let create_packet = PacketCreateImage {
        image_name: "prismtrace_output",
        width,
        height,
        channel_names: &["R", "G", "B"],
        grab_focus: true,
    };
    if let Err(e) = client.send(create_packet) {
        warn!("Failed to create image in TEV: {}", e);
        return;
    }

    // RGBRGB... -> RRR...GGG...BBB...
    let pixels: Vec<&[u8]> = buffer.chunks_exact(stride).collect();
    let rgb_data: Vec<f32> = (0..3)
        .flat_map(|channel| pixels.iter().map(move |pixel| srgb_to_linear(pixel[channel])))
        .collect();

    let plane = u64::from(width) * u64::from(height);
    let start_time = std::time::Instant::now();
    let update_packet = PacketUpdateImage {
        image_name: "prismtrace_output",
        grab_focus: false,
        channel_names: &["R", "G", "B"],
        x: 0,
        y: 0,
        width,
        height,
        channel_offsets: &[0, plane, 2 * plane],
        channel_strides: &[1, 1, 1],
        data: &rgb_data,
    };

    match client.send(update_packet) {
        Ok(_) => info!(
            "Image data sent to TEV at {} in {:.2?}",
            tev_address,
            start_time.elapsed()
        ),
        Err(e) => warn!("Failed to send image data to TEV: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_rgb_strips_padding() {
        let buffer = [1, 2, 3, 0, 4, 5, 6, 0];
        assert_eq!(&*pack_rgb(&buffer, 4), &[1, 2, 3, 4, 5, 6]);
        assert!(matches!(pack_rgb(&buffer[..6], 3), Cow::Borrowed(_)));
    }

    #[test]
    fn srgb_endpoints_map_to_linear_endpoints() {
        assert_eq!(srgb_to_linear(0), 0.0);
        assert!((srgb_to_linear(255) - 1.0).abs() < 1e-6);
        assert!(srgb_to_linear(128) < 0.5);
    }

    #[test]
    fn ppm_and_png_are_written() {
        let dir = std::env::temp_dir();
        let buffer = [255u8, 0, 0, 0, 255, 0, 0, 0, 255, 10, 20, 30];
        for name in ["prismtrace_output_test.ppm", "prismtrace_output_test.png"] {
            let path = dir.join(name);
            let path_str = path.to_str().unwrap();
            save_image(&buffer, 3, path_str, 2, 2).unwrap();

            let decoded = image::open(&path).unwrap().to_rgb8();
            assert_eq!(decoded.dimensions(), (2, 2));
            assert_eq!(decoded.as_raw().as_slice(), &buffer);
            std::fs::remove_file(&path).unwrap();
        }
    }
}
