//! Server-side HTML rendering of composed pages with Leptos `view!`.
//!
//! Output order is fixed: site stylesheet, sidebar, page content, global
//! style. The global style must come last so it overrides earlier rules.
//! Text and attribute values are escaped by the view renderer; only the two
//! stylesheets and the sidebar script are written raw.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::composer::blocks::{ContentBlock, Inline};
use crate::models::menu::MenuChoice;
use crate::models::profile::SiteConfig;

/// Submits the sidebar form as soon as a radio changes.
const SIDEBAR_SCRIPT: &str = "document.querySelectorAll('.sidebar input[type=radio]')\
.forEach(function (r) { r.addEventListener('change', function () { r.form.submit(); }); });";

/// Everything needed to render one page.
pub struct PageView<'a> {
    pub site: &'a SiteConfig,
    pub stylesheet: &'a str,
    pub choice: MenuChoice,
    pub blocks: &'a [ContentBlock],
    pub global_style: &'a str,
}

pub fn render_page(page: &PageView<'_>) -> String {
    let title = page.site.page_title.clone();
    let favicon = format!(
        "data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22>\
         <text y=%22.9em%22 font-size=%2290%22>{}</text></svg>",
        page.site.page_icon
    );
    let stylesheet = style_text(page.stylesheet);
    let global_style = style_text(page.global_style);
    let content = page
        .blocks
        .iter()
        .cloned()
        .map(block_view)
        .collect_view();
    let active = page.choice;

    let document = view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <link rel="icon" href=favicon/>
                <style inner_html=stylesheet></style>
            </head>
            <body class="stApp">
                <Sidebar active=active/>
                <main class="main">{content}</main>
                <style inner_html=global_style></style>
            </body>
        </html>
    };

    format!("<!DOCTYPE html>\n{}", document.to_html())
}

/// CSS is trusted site content; only a closing tag could break out.
fn style_text(css: &str) -> String {
    css.replace("</style", "<\\/style")
}

/// Navigation radios, one per menu choice, with the active one checked.
#[component]
fn Sidebar(active: MenuChoice) -> impl IntoView {
    let options = MenuChoice::ALL
        .into_iter()
        .map(|choice| {
            let slug = choice.slug();
            let label = choice.label();
            let checked = choice == active;
            view! {
                <label>
                    <input type="radio" name="page" value=slug checked=checked/>
                    " "
                    {label}
                </label>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <div class="sidebar-content">
                <h1>"Navigation"</h1>
                <form method="get" action="/">
                    <fieldset>
                        <legend>"Go to"</legend>
                        {options}
                    </fieldset>
                    <noscript><button type="submit">"Go"</button></noscript>
                </form>
                <script inner_html=SIDEBAR_SCRIPT></script>
            </div>
        </aside>
    }
}

fn inline_view(span: Inline) -> AnyView {
    match span {
        Inline::Text { text } => text.into_any(),
        Inline::Strong { text } => view! { <strong>{text}</strong> }.into_any(),
        Inline::Link { label, url } => link_view(label, url),
    }
}

fn link_view(label: String, url: String) -> AnyView {
    view! { <a href=url target="_blank" rel="noopener">{label}</a> }.into_any()
}

fn block_view(block: ContentBlock) -> AnyView {
    match block {
        ContentBlock::Title { text } => view! { <h1>{text}</h1> }.into_any(),
        ContentBlock::Heading { level, text } => match level {
            0..=2 => view! { <h2>{text}</h2> }.into_any(),
            3 => view! { <h3>{text}</h3> }.into_any(),
            4 => view! { <h4>{text}</h4> }.into_any(),
            5 => view! { <h5>{text}</h5> }.into_any(),
            _ => view! { <h6>{text}</h6> }.into_any(),
        },
        ContentBlock::Paragraph { spans } => {
            let spans = spans.into_iter().map(inline_view).collect_view();
            view! { <p>{spans}</p> }.into_any()
        }
        ContentBlock::BulletList { marker, items } => {
            let items = items
                .into_iter()
                .map(|item| {
                    let marker = marker.as_ref().map(|m| format!("{m} "));
                    let spans = item.into_iter().map(inline_view).collect_view();
                    view! { <li>{marker}{spans}</li> }
                })
                .collect_view();
            view! { <ul>{items}</ul> }.into_any()
        }
        ContentBlock::Divider => view! { <hr/> }.into_any(),
        ContentBlock::Spacer => view! { <br/> }.into_any(),
        ContentBlock::Image {
            image,
            width,
            caption,
        } => {
            let src = image.href();
            let width = width.to_string();
            let alt = caption.clone().unwrap_or_default();
            let caption = caption.map(|c| view! { <figcaption>{c}</figcaption> });
            view! {
                <figure>
                    <img src=src width=width alt=alt/>
                    {caption}
                </figure>
            }
            .into_any()
        }
        ContentBlock::DownloadButton {
            label,
            file_name,
            mime,
            href,
        } => view! {
            <a class="download-button" href=href download=file_name type=mime>{label}</a>
        }
        .into_any(),
        ContentBlock::Link { label, url } => {
            let link = link_view(label, url);
            view! { <p>{link}</p> }.into_any()
        }
        ContentBlock::Columns { weights, columns } => {
            let columns = columns
                .into_iter()
                .enumerate()
                .map(|(i, column)| {
                    let style = format!("flex:{}", weights.get(i).copied().unwrap_or(1));
                    let blocks = column.into_iter().map(block_view).collect_view();
                    view! { <div class="column" style=style>{blocks}</div> }
                })
                .collect_view();
            view! {
                <div class="columns" style="display:flex;gap:1rem">{columns}</div>
            }
            .into_any()
        }
        ContentBlock::EmbeddedHtml { html: fragment, height } => {
            // No allow-same-origin: the widget must not reach the parent document.
            let height = height.to_string();
            view! {
                <iframe
                    class="embed"
                    sandbox="allow-scripts allow-popups"
                    height=height
                    style="width:100%;border:0"
                    srcdoc=fragment
                ></iframe>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::blocks::{link, text, ImageRef};

    fn page<'a>(site: &'a SiteConfig, blocks: &'a [ContentBlock]) -> PageView<'a> {
        PageView {
            site,
            stylesheet: "h1 > span { color: white; }",
            choice: MenuChoice::Contact,
            blocks,
            global_style: ".stApp { background-color: #000000; }",
        }
    }

    /// The `<iframe ...>` opening tag of a rendered page.
    fn iframe_tag(html: &str) -> &str {
        let start = html.find("<iframe").expect("iframe rendered");
        let end = start + html[start..].find('>').expect("iframe tag closed");
        &html[start..=end]
    }

    #[test]
    fn test_global_style_comes_after_content_and_stylesheet() {
        let site = SiteConfig::builtin().unwrap();
        let blocks = vec![ContentBlock::heading(2, "Contact")];
        let html = render_page(&page(&site, &blocks));

        assert!(html.starts_with("<!DOCTYPE html>"));
        let stylesheet = html.find("h1 > span { color: white; }").unwrap();
        let content = html.find("Contact</h2>").unwrap();
        let global = html.find("background-color: #000000").unwrap();
        assert!(stylesheet < content);
        assert!(content < global);
    }

    #[test]
    fn test_sidebar_lists_every_choice_and_checks_one() {
        let site = SiteConfig::builtin().unwrap();
        let html = render_page(&page(&site, &[]));
        assert_eq!(html.matches("checked").count(), 1);
        for choice in MenuChoice::ALL {
            assert!(html.contains(&format!("value=\"{}\"", choice.slug())));
            assert!(html.contains(choice.label()));
        }
        let checked = html.find("checked").unwrap();
        let contact = html.find("value=\"contact\"").unwrap();
        let testimonials = html.find("value=\"testimonials\"").unwrap();
        assert!(contact < checked && checked < testimonials);
    }

    #[test]
    fn test_page_title_is_escaped() {
        let mut site = SiteConfig::builtin().unwrap();
        site.page_title = "<script>alert(1)</script>".to_string();
        let html = render_page(&page(&site, &[]));
        assert!(html.contains("&lt;script&gt;alert(1)"));
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn test_embedded_html_is_sandboxed_in_iframe() {
        let site = SiteConfig::builtin().unwrap();
        let blocks = vec![ContentBlock::EmbeddedHtml {
            html: "<script>parent.document.body.remove()</script>".to_string(),
            height: 600,
        }];
        let html = render_page(&page(&site, &blocks));
        let tag = iframe_tag(&html);

        assert!(tag.contains("sandbox=\"allow-scripts allow-popups\""), "{tag}");
        assert!(!tag.contains("allow-same-origin"));
        assert!(tag.contains("height=\"600\""));
        assert!(tag.contains("srcdoc=\""));
    }

    #[test]
    fn test_columns_links_and_images_render() {
        let site = SiteConfig::builtin().unwrap();
        let blocks = vec![ContentBlock::Columns {
            weights: vec![1, 4],
            columns: vec![
                vec![ContentBlock::Image {
                    image: ImageRef::Testimonial,
                    width: 100,
                    caption: None,
                }],
                vec![ContentBlock::paragraph(vec![
                    text("— "),
                    link("Mickey", "https://example.org/m?a=1&b=2"),
                ])],
            ],
        }];
        let html = render_page(&page(&site, &blocks));
        assert!(html.contains("style=\"flex:1\""));
        assert!(html.contains("style=\"flex:4\""));
        assert!(html.contains("src=\"/images/testimonial\""));
        assert!(html.contains("width=\"100\""));
        assert!(html.contains("href=\"https://example.org/m?a=1&amp;b=2\""));
    }

    #[test]
    fn test_download_button_carries_file_name() {
        let site = SiteConfig::builtin().unwrap();
        let blocks = vec![ContentBlock::DownloadButton {
            label: "Download".to_string(),
            file_name: "cv.pdf".to_string(),
            mime: "application/octet-stream".to_string(),
            href: "/resume".to_string(),
        }];
        let html = render_page(&page(&site, &blocks));
        assert!(html.contains("href=\"/resume\""));
        assert!(html.contains("download=\"cv.pdf\""));
    }

    #[test]
    fn test_stylesheet_cannot_close_style_tag() {
        let css = style_text("p{}</style><script>");
        assert!(!css.contains("</style"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let site = SiteConfig::builtin().unwrap();
        let blocks = vec![ContentBlock::bullets(Some("►"), ["one", "two"])];
        assert_eq!(
            render_page(&page(&site, &blocks)),
            render_page(&page(&site, &blocks))
        );
    }
}
