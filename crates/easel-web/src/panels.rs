//! Story screens and the confession choice wiring.
//!
//! Copy is data: each screen renders as a glassy card inside a full-height
//! section of the scroll container. The confession and outcome panels are
//! part of the page scaffold; this module only toggles them.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use easel_core::story::Story;

use crate::constants::ACCEPT_SCROLL_DELAY_MS;
use crate::dom;
use crate::finale::FinaleLayer;
use crate::portrait::PortraitLayer;

struct Screen {
    title: &'static str,
    lines: &'static [&'static str],
}

// An empty line renders as a breathing pause between paragraphs.
const SCREENS: &[Screen] = &[
    Screen {
        title: "Every painting begins with an empty canvas.",
        lines: &[
            "Quiet.",
            "Undisturbed.",
            "Waiting for something... or someone.",
            "",
            "So did my life.",
        ],
    },
    Screen {
        title: "Then one day... a message appeared.",
        lines: &[
            "Hi! Nice to meet you.",
            "",
            "You were just someone a friend introduced.",
            "A name on my screen.",
            "A stranger in my notifications.",
        ],
    },
    Screen {
        title: "We talked.",
        lines: &[
            "About random things.",
            "Important things.",
            "Completely meaningless things.",
            "",
            "We joked.",
            "We confused each other.",
            "We misunderstood... and laughed anyway.",
            "",
            "You pretended not to see my messages sometimes.",
            "",
            "But somehow... you always replied.",
        ],
    },
    Screen {
        title: "",
        lines: &[
            "You dodged my calls like a professional.",
            "But never our conversations.",
            "",
            "You thought I was teasing.",
            "I thought you knew I wasn't.",
            "",
            "Turns out... we were both just pretending to be calm.",
        ],
    },
    Screen {
        title: "Somewhere along the way...",
        lines: &[
            "I started imagining you.",
            "Not how you look, but how you are.",
            "",
            "Your humor.",
            "Your chaos.",
            "Your strange logic.",
            "",
            "Every message became a brush stroke.",
            "I was painting you in my mind.",
        ],
    },
    Screen {
        title: "The strange part is...",
        lines: &[
            "I've never seen you.",
            "",
            "Yet somehow you stopped feeling like a stranger.",
        ],
    },
    Screen {
        title: "You became an important part of my day.",
        lines: &[
            "Somewhere between random conversations...",
            "and waiting for your replies...",
            "",
            "Not planned.",
            "Not expected.",
            "",
            "Just... happened.",
        ],
    },
    Screen {
        title: "I don't know if the picture in my mind is accurate.",
        lines: &[
            "But I know one thing.",
            "",
            "I enjoyed creating it.",
        ],
    },
];

/// Render the narrative screens into `#story`, ahead of the confession panel
/// the scaffold already carries.
pub fn mount_story(document: &web::Document) -> anyhow::Result<()> {
    let container = dom::require_element(document, "story")?;
    for screen in SCREENS {
        let section = document
            .create_element("section")
            .map_err(|e| anyhow::anyhow!("create section: {e:?}"))?;
        section.set_class_name("screen");
        let mut html = String::new();
        html.push_str("<div class=\"card\">");
        if !screen.title.is_empty() {
            html.push_str(&format!("<h2>{}</h2>", screen.title));
        }
        for line in screen.lines {
            if line.is_empty() {
                html.push_str("<div class=\"pause\"></div>");
            } else {
                html.push_str(&format!("<p>{line}</p>"));
            }
        }
        html.push_str("</div>");
        section.set_inner_html(&html);
        container
            .append_child(&section)
            .map_err(|e| anyhow::anyhow!("append section: {e:?}"))?;
    }
    Ok(())
}

/// Wire the confession buttons. Both run through [`Story`], which makes the
/// two outcomes mutually exclusive; the click listeners themselves live for
/// the page lifetime.
pub fn wire_choices(
    window: &web::Window,
    document: &web::Document,
    story: Rc<RefCell<Story>>,
    portrait: Rc<RefCell<PortraitLayer>>,
    finale: Rc<RefCell<FinaleLayer>>,
) {
    {
        let window = window.clone();
        let document_c = document.clone();
        let story = story.clone();
        dom::add_click_listener(document, "accept-btn", move || {
            if !story.borrow_mut().accept() {
                return;
            }
            swap_panels(&document_c, "accepted-panel");
            portrait.borrow_mut().set_active(true);
            finale.borrow_mut().begin();
            scroll_to_bottom_after(&window, &document_c, ACCEPT_SCROLL_DELAY_MS);
        });
    }
    {
        let document_c = document.clone();
        dom::add_click_listener(document, "reject-btn", move || {
            if !story.borrow_mut().reject() {
                return;
            }
            swap_panels(&document_c, "rejected-panel");
        });
    }
    for id in ["accepted-replay-btn", "rejected-replay-btn"] {
        dom::add_click_listener(document, id, move || {
            if let Some(window) = web::window() {
                let _ = window.location().reload();
            }
        });
    }
}

fn swap_panels(document: &web::Document, outcome_id: &str) {
    if let Some(el) = document.get_element_by_id("confession-panel") {
        dom::hide(&el);
    }
    if let Some(el) = document.get_element_by_id(outcome_id) {
        dom::show(&el);
    }
}

fn scroll_to_bottom_after(window: &web::Window, document: &web::Document, delay_ms: i32) {
    let window_t = window.clone();
    let document_t = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let height = document_t
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        let opts = web::ScrollToOptions::new();
        opts.set_top(height);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        window_t.scroll_to_with_scroll_to_options(&opts);
    }) as Box<dyn FnMut()>);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
    closure.forget();
}
