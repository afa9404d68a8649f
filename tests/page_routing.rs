use housing_dashboard::app::{GALLERY_IMAGES, Page};

#[test]
fn gallery_path_selects_gallery() {
    assert_eq!(Page::from_path("/gallery"), Page::Gallery);
    assert_eq!(Page::from_path("/gallery/"), Page::Gallery);
}

#[test]
fn everything_else_is_the_dashboard() {
    for path in ["/", "", "/index.html", "/gallery/extra", "/Gallery"] {
        assert_eq!(Page::from_path(path), Page::Dashboard, "{path}");
    }
}

#[test]
fn gallery_shows_both_static_plots() {
    let sources: Vec<&str> = GALLERY_IMAGES.iter().map(|(_, src)| *src).collect();
    assert_eq!(sources, ["/plot1.png", "/plot2.png"]);
}
