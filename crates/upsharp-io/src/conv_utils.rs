/// Expand an rgb8 buffer to rgba8 with an opaque alpha channel.
pub(crate) fn rgba_from_rgb(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len() / 3 * 4);
    for pixel in buf.chunks_exact(3) {
        out.extend_from_slice(pixel);
        out.push(255);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_from_rgb_expands() {
        let rgb = [1, 2, 3, 4, 5, 6];
        assert_eq!(rgba_from_rgb(&rgb), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }
}
