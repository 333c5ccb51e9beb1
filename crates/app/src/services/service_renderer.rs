//! Service renderer — turns the `service` query parameter into the
//! service-detail page content.

use jotasite_domain::catalog::Catalog;
use jotasite_domain::contact::ContactLink;
use jotasite_domain::error::{MissingAnchorError, SiteError};
use jotasite_domain::markup::{Element as Tag, Node};
use jotasite_domain::service::{ServiceRecord, ServiceSlug};

use crate::ports::{Document, Element, Location};

/// Heading above the image gallery.
const GALLERY_TITLE: &str = "Galería de Proyectos";
/// Label of the call-to-action link.
const CTA_LABEL: &str = " COTIZAR ESTE SERVICIO";
/// Fallback heading for an absent or unknown slug.
const NOT_FOUND_TITLE: &str = "Servicio no encontrado";

/// Where the service page content goes and which parameter selects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePageSettings {
    /// Id of the element whose content is replaced.
    pub container_id: String,
    /// Query-string key carrying the slug.
    pub query_param: String,
}

impl Default for ServicePageSettings {
    fn default() -> Self {
        Self {
            container_id: "service-details".to_string(),
            query_param: "service".to_string(),
        }
    }
}

/// Result of rendering a service page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// The slug matched a catalog record.
    Found { slug: ServiceSlug, nodes: Vec<Node> },
    /// The slug was absent or unknown; `nodes` is the fallback heading.
    NotFound { nodes: Vec<Node> },
}

impl Rendered {
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        match self {
            Self::Found { nodes, .. } | Self::NotFound { nodes } => nodes,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        jotasite_domain::markup::to_html(self.nodes())
    }
}

/// Renders catalog records into page markup.
#[derive(Debug, Clone)]
pub struct ServiceRenderer {
    catalog: Catalog,
    contact: ContactLink,
}

impl ServiceRenderer {
    #[must_use]
    pub fn new(catalog: Catalog, contact: ContactLink) -> Self {
        Self { catalog, contact }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// First value of `key` in a raw query string (`?a=1&service=web`).
    #[must_use]
    pub fn slug_from_query(search: &str, key: &str) -> Option<String> {
        let query = search.strip_prefix('?').unwrap_or(search);
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Build the page content for `slug`.
    ///
    /// Absent and unknown slugs both produce the not-found heading and
    /// nothing else.
    #[must_use]
    pub fn render_service(&self, slug: Option<&str>) -> Rendered {
        match slug.and_then(|s| self.catalog.lookup(s)) {
            Some(record) => Rendered::Found {
                slug: record.slug,
                nodes: self.service_nodes(record),
            },
            None => Rendered::NotFound {
                nodes: vec![not_found_heading()],
            },
        }
    }

    /// Read the slug from `location`, render it, and replace the content of
    /// the container element.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingAnchor`] when the container is absent, or
    /// [`SiteError::Surface`] if the URL cannot be read or the page rejects
    /// the new content.
    pub fn render_into<D, L>(
        &self,
        document: &D,
        location: &L,
        settings: &ServicePageSettings,
    ) -> Result<Rendered, SiteError>
    where
        D: Document,
        L: Location,
    {
        let container = document
            .element_by_id(&settings.container_id)
            .ok_or_else(|| MissingAnchorError::new(format!("#{}", settings.container_id)))?;
        let slug = Self::slug_from_query(&location.search()?, &settings.query_param);
        let rendered = self.render_service(slug.as_deref());
        container.replace_children(rendered.nodes())?;

        match &rendered {
            Rendered::Found { slug, .. } => tracing::info!(%slug, "rendered service page"),
            Rendered::NotFound { .. } => {
                tracing::info!(requested = ?slug, "service not found, rendered fallback");
            }
        }
        Ok(rendered)
    }

    fn service_nodes(&self, record: &ServiceRecord) -> Vec<Node> {
        let header = Tag::new("div")
            .class("service-header")
            .attr("style", format!("background-image: url('{}')", record.image))
            .child(
                Tag::new("div").class("service-header-overlay").child(
                    Tag::new("h1")
                        .class("service-title")
                        .text(record.title.as_str()),
                ),
            );

        let gallery = Tag::new("div").class("gallery").children(
            record.gallery.iter().map(|src| {
                Node::from(
                    Tag::new("img")
                        .attr("src", src.as_str())
                        .attr("alt", format!("Proyecto de {}", record.title))
                        .attr("loading", "lazy"),
                )
            }),
        );

        let cta = Tag::new("div").class("cta-section").child(
            Tag::new("a")
                .attr("href", self.contact.quote_url(&record.title))
                .class("cta-whatsapp")
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .child(Tag::new("i").class("fab fa-whatsapp"))
                .text(CTA_LABEL),
        );

        let content = Tag::new("div")
            .class("service-content")
            .child(
                Tag::new("p")
                    .class("service-description")
                    .text(record.description.as_str()),
            )
            .child(
                Tag::new("div")
                    .class("service-details-body")
                    .child(record.details.clone()),
            )
            .child(Tag::new("h2").class("gallery-title").text(GALLERY_TITLE))
            .child(gallery)
            .child(cta);

        vec![header.into(), content.into()]
    }
}

fn not_found_heading() -> Node {
    Tag::new("h1")
        .class("service-title text-center")
        .text(NOT_FOUND_TITLE)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{FakeDocument, FakeLocation};

    fn renderer() -> ServiceRenderer {
        ServiceRenderer::new(
            Catalog::builtin().unwrap(),
            ContactLink::new(
                "573022985621",
                "Hola Jota, estoy interesado en el servicio de ",
            )
            .unwrap(),
        )
    }

    fn all_nodes(rendered: &Rendered) -> Node {
        Tag::new("root")
            .children(rendered.nodes().iter().cloned())
            .into()
    }

    #[test]
    fn should_render_web_service_with_title_gallery_and_cta() {
        let rendered = renderer().render_service(Some("web"));
        assert!(rendered.is_found());

        let tree = all_nodes(&rendered);
        let title = tree.find_all("h1");
        assert_eq!(title.len(), 1);
        assert_eq!(
            Node::Element(title[0].clone()).text_content(),
            "Diseño Web & Desarrollo"
        );

        let images: Vec<_> = tree
            .find_all("img")
            .iter()
            .filter_map(|img| img.get_attr("src").map(str::to_string))
            .collect();
        assert_eq!(
            images,
            vec![
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=300&fit=crop",
                "https://images.unsplash.com/photo-1547658719-da2b51169166?w=400&h=300&fit=crop",
            ]
        );

        let links = tree.find_all("a");
        assert_eq!(links.len(), 1);
        let href = links[0].get_attr("href").unwrap();
        assert!(href.starts_with("https://wa.me/573022985621?text="));
        assert!(href.ends_with("Dise%C3%B1o%20Web%20%26%20Desarrollo"));
    }

    #[test]
    fn should_set_header_background_from_record_image() {
        let rendered = renderer().render_service(Some("video"));
        let tree = all_nodes(&rendered);
        let header = tree
            .find_all("div")
            .into_iter()
            .find(|el| el.has_class("service-header"))
            .unwrap();
        assert_eq!(
            header.get_attr("style"),
            Some("background-image: url('img/video_ads.png')")
        );
    }

    #[test]
    fn should_label_gallery_images_with_service_title() {
        let rendered = renderer().render_service(Some("impresion"));
        let tree = all_nodes(&rendered);
        for img in tree.find_all("img") {
            assert_eq!(
                img.get_attr("alt"),
                Some("Proyecto de Impresión Variable Industrial")
            );
        }
    }

    #[test]
    fn should_insert_details_verbatim() {
        let rendered = renderer().render_service(Some("diseno"));
        let html = rendered.to_html();
        assert!(html.contains("<li><strong>Manuales de Marca:</strong>"));
        assert!(html.contains("<h2 class=\"gallery-title\">Galería de Proyectos</h2>"));
    }

    #[test]
    fn should_escape_title_in_markup() {
        let html = renderer().render_service(Some("web")).to_html();
        assert!(html.contains("Diseño Web &amp; Desarrollo"));
        assert!(!html.contains("Diseño Web & Desarrollo<"));
    }

    #[test]
    fn should_render_only_not_found_heading_for_unknown_slug() {
        let rendered = renderer().render_service(Some("nonexistent"));
        assert!(!rendered.is_found());
        assert_eq!(
            rendered.to_html(),
            "<h1 class=\"service-title text-center\">Servicio no encontrado</h1>"
        );
    }

    #[test]
    fn should_render_same_fallback_for_absent_slug() {
        let absent = renderer().render_service(None);
        let unknown = renderer().render_service(Some("nonexistent"));
        assert_eq!(absent, unknown);
        assert_eq!(absent.nodes().len(), 1);
    }

    #[test]
    fn should_extract_first_matching_query_value() {
        assert_eq!(
            ServiceRenderer::slug_from_query("?utm=x&service=web&service=video", "service"),
            Some("web".to_string())
        );
        assert_eq!(
            ServiceRenderer::slug_from_query("service=video", "service"),
            Some("video".to_string())
        );
        assert_eq!(ServiceRenderer::slug_from_query("", "service"), None);
        assert_eq!(ServiceRenderer::slug_from_query("?other=web", "service"), None);
    }

    #[test]
    fn should_decode_percent_escapes_in_query() {
        assert_eq!(
            ServiceRenderer::slug_from_query("?service=dise%C3%B1o", "service"),
            Some("diseño".to_string())
        );
    }

    #[test]
    fn should_replace_container_content_once() {
        let (doc, container) = FakeDocument::default().with_id("service-details");
        let rendered = renderer()
            .render_into(
                &doc,
                &FakeLocation("?service=web"),
                &ServicePageSettings::default(),
            )
            .unwrap();

        assert!(matches!(rendered, Rendered::Found { slug: ServiceSlug::Web, .. }));
        assert_eq!(container.replace_count(), 1);
        assert_eq!(container.html(), Some(rendered.to_html()));
    }

    #[test]
    fn should_render_fallback_into_container_without_query() {
        let (doc, container) = FakeDocument::default().with_id("service-details");
        renderer()
            .render_into(&doc, &FakeLocation(""), &ServicePageSettings::default())
            .unwrap();
        assert_eq!(
            container.html().as_deref(),
            Some("<h1 class=\"service-title text-center\">Servicio no encontrado</h1>")
        );
    }

    #[test]
    fn should_fail_when_container_missing() {
        let result = renderer().render_into(
            &FakeDocument::default(),
            &FakeLocation("?service=web"),
            &ServicePageSettings::default(),
        );
        assert!(matches!(result, Err(SiteError::MissingAnchor(_))));
    }

    #[test]
    fn should_honour_custom_query_param() {
        let (doc, container) = FakeDocument::default().with_id("detalle");
        let settings = ServicePageSettings {
            container_id: "detalle".to_string(),
            query_param: "s".to_string(),
        };
        let rendered = renderer()
            .render_into(&doc, &FakeLocation("?s=video"), &settings)
            .unwrap();
        assert!(rendered.is_found());
        assert!(container.html().unwrap().contains("Video Ads &amp; Motion Graphics"));
    }
}
