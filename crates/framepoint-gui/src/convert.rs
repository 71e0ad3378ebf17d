/// Convert a decoded image into the texture format egui paints.
pub fn to_color_image(decoded: &image::DynamicImage) -> egui::ColorImage {
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
