use maud::{html, Markup};

use crate::names;

/// Pager button swapping the results region; disabled when there is nowhere to go.
pub fn page_button(label: &str, href: Option<&str>) -> Markup {
    html! {
        @if let Some(href) = href {
            button type="button"
                   hx-get=(href)
                   hx-target=(names::RESULTS_TARGET)
                   hx-swap="outerHTML"
                   hx-sync=(names::BROWSE_SYNC)
                   hx-push-url="true" {
                (label)
            }
        } @else {
            button type="button" disabled { (label) }
        }
    }
}
