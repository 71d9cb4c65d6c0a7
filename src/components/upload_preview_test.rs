use super::*;

#[test]
fn image_mime_renders_a_thumbnail() {
    let card = FilePreview::from_read(
        "photo.png".to_owned(),
        2048,
        "image/png",
        "data:image/png;base64,AAAA".to_owned(),
    );
    assert_eq!(
        card.shape,
        PreviewShape::Image { data_url: "data:image/png;base64,AAAA".to_owned() }
    );
}

#[test]
fn other_mimes_render_the_generic_icon() {
    let card = FilePreview::from_read(
        "report.pdf".to_owned(),
        4096,
        "application/pdf",
        "data:application/pdf;base64,AAAA".to_owned(),
    );
    assert_eq!(card.shape, PreviewShape::Icon);
}

#[test]
fn size_labels_are_human_readable() {
    let card = FilePreview::from_read("a.bin".to_owned(), 2048, "application/octet-stream", String::new());
    assert_eq!(card.size_label, "2 KB");
}

#[test]
fn cards_get_distinct_ids() {
    let a = FilePreview::from_read("a".to_owned(), 1, "text/plain", String::new());
    let b = FilePreview::from_read("b".to_owned(), 1, "text/plain", String::new());
    assert_ne!(a.id, b.id);
}
