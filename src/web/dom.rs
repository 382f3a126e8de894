use crate::pointer::ElementBounds;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current on-screen size and page offset of the host element.
pub fn element_bounds(el: &web::HtmlElement) -> ElementBounds {
    ElementBounds {
        width: el.offset_width() as f32,
        height: el.offset_height() as f32,
        offset_left: el.offset_left() as f32,
        offset_top: el.offset_top() as f32,
    }
}

pub fn device_pixel_ratio() -> f32 {
    web::window().map(|w| w.device_pixel_ratio() as f32).unwrap_or(1.0)
}

/// Coarse mobile detection, used only to pick the mobile pixel-ratio divisor.
pub fn is_mobile() -> bool {
    let ua = match web::window().and_then(|w| w.navigator().user_agent().ok()) {
        Some(ua) => ua.to_lowercase(),
        None => return false,
    };
    ["android", "iphone", "ipad", "ipod", "mobile", "blackberry"]
        .iter()
        .any(|m| ua.contains(m))
}
