use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, utils};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4/dist/htmx.min.js";

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src=(HTMX_SRC) {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header(locale: &str) -> Markup {
    html! {
        header.site-header {
            div {
                h1 {
                    a href=(names::HOME_URL) { (t!("app.title", locale = locale)) }
                }
                p { (t!("app.tagline", locale = locale)) }
            }
            small { (utils::VERSION) }
        }
    }
}

pub fn page(title: &str, body: Markup, locale: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";

                (css())
                (js())
                (icon())

                title { (title) " - " (t!("app.title", locale = locale)) }
            }

            body {
                (header(locale))
                main { (body) }
            }
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) }
        (body)
    }
}

/// Full page for plain requests, a titled fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup, locale: &str) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body, locale)
    }
}
