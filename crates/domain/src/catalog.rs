//! Catalog — the fixed table of service records.
//!
//! Built once at start-up and never mutated.

use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::markup::TrustedHtml;
use crate::service::{ServiceRecord, ServiceSlug};

/// Immutable mapping from slug to service record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: BTreeMap<ServiceSlug, ServiceRecord>,
}

impl Catalog {
    /// Build a catalog from records. A later record replaces an earlier one
    /// with the same slug.
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = ServiceRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.slug, r)).collect(),
        }
    }

    /// The studio's published services.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a built-in record is malformed (should
    /// not happen with hardcoded inputs).
    pub fn builtin() -> Result<Self, ValidationError> {
        Ok(Self::new([
            diseno()?,
            impresion()?,
            video()?,
            web()?,
        ]))
    }

    #[must_use]
    pub fn get(&self, slug: ServiceSlug) -> Option<&ServiceRecord> {
        self.records.get(&slug)
    }

    /// Look up by the raw slug string from a URL. Unknown strings yield `None`.
    #[must_use]
    pub fn lookup(&self, slug: &str) -> Option<&ServiceRecord> {
        slug.parse().ok().and_then(|slug| self.get(slug))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in slug order.
    pub fn iter(&self) -> impl Iterator<Item = &ServiceRecord> {
        self.records.values()
    }
}

fn diseno() -> Result<ServiceRecord, ValidationError> {
    ServiceRecord::builder(ServiceSlug::Diseno)
        .title("Diseño Gráfico & Branding")
        .image("img/branding.png")
        .description(
            "Creamos identidades visuales que perduran. Nuestro enfoque en el Arte Final garantiza que lo que ves en pantalla es exactamente lo que obtienes impreso.",
        )
        .details(TrustedHtml::new(
            r#"<p>El diseño gráfico no es solo estética, es comunicación estratégica. En Jota Studio nos especializamos en:</p>
<ul class="list-disc pl-5 mt-4 space-y-2 text-slate-400">
    <li><strong>Branding e Identidad:</strong> Creación de logotipos, paletas de color y tipografías que definen tu marca.</li>
    <li><strong>Manuales de Marca:</strong> Guías técnicas para el uso correcto de tu imagen corporativa.</li>
    <li><strong>Diseño Editorial:</strong> Revistas, catálogos y folletos diagramados con precisión.</li>
    <li><strong>Arte Final:</strong> Preparación técnica de archivos para imprenta (separación de colores, troqueles, demasías).</li>
</ul>"#,
        ))
        .gallery_image("https://images.unsplash.com/photo-1626785774573-4b799315545d?w=400&h=300&fit=crop")
        .gallery_image("https://images.unsplash.com/photo-1558655146-d09347e92766?w=400&h=300&fit=crop")
        .gallery_image("https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400&h=300&fit=crop")
        .build()
}

fn impresion() -> Result<ServiceRecord, ValidationError> {
    ServiceRecord::builder(ServiceSlug::Impresion)
        .title("Impresión Variable Industrial")
        .image("img/Impresora-termica.webp")
        .description(
            "Soluciones industriales para etiquetado y trazabilidad. Control total sobre tus datos variables.",
        )
        .details(TrustedHtml::new(
            r#"<p>La impresión de datos variables es crucial para la logística moderna. Ofrecemos:</p>
<ul class="list-disc pl-5 mt-4 space-y-2 text-slate-400">
    <li><strong>Etiquetas de Código de Barras:</strong> EAN-13, UPC, Code 128, garantizando lectura perfecta.</li>
    <li><strong>Códigos QR Dinámicos:</strong> Enlaces a menús, webs o fichas técnicas.</li>
    <li><strong>Serialización:</strong> Numeración consecutiva para control de inventario o lotes.</li>
    <li><strong>Impresión Térmica:</strong> Alta durabilidad y resistencia para entornos industriales.</li>
</ul>"#,
        ))
        .gallery_image("https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=400&h=300&fit=crop")
        .gallery_image("https://images.unsplash.com/photo-1565514020176-dbf2277e4954?w=400&h=300&fit=crop")
        .build()
}

fn video() -> Result<ServiceRecord, ValidationError> {
    ServiceRecord::builder(ServiceSlug::Video)
        .title("Video Ads & Motion Graphics")
        .image("img/video_ads.png")
        .description("Edición dinámica diseñada para captar la atención en los primeros segundos.")
        .details(TrustedHtml::new(
            r#"<p>El video es el rey del contenido en redes sociales. Potencia tu marca con:</p>
<ul class="list-disc pl-5 mt-4 space-y-2 text-slate-400">
    <li><strong>Reels y TikToks:</strong> Edición rápida, subtítulos dinámicos y música en tendencia.</li>
    <li><strong>Motion Graphics:</strong> Animación de logotipos y elementos gráficos para explicar servicios complejos.</li>
    <li><strong>Videos Corporativos:</strong> Presentaciones profesionales de tu empresa o producto.</li>
</ul>"#,
        ))
        .gallery_image("https://images.unsplash.com/photo-1492691527719-9d1e07e534b4?w=400&h=300&fit=crop")
        .gallery_image("https://images.unsplash.com/photo-1536240478700-b869070f9279?w=400&h=300&fit=crop")
        .build()
}

fn web() -> Result<ServiceRecord, ValidationError> {
    ServiceRecord::builder(ServiceSlug::Web)
        .title("Diseño Web & Desarrollo")
        .image("img/high-angle-hands-holding-paper.jpg")
        .description("Sitios web que no solo se ven bien, sino que convierten visitantes en clientes.")
        .details(TrustedHtml::new(
            r#"<p>Tu web es tu oficina digital abierta 24/7. Desarrollamos:</p>
<ul class="list-disc pl-5 mt-4 space-y-2 text-slate-400">
    <li><strong>Landing Pages:</strong> Páginas de aterrizaje optimizadas para campañas publicitarias.</li>
    <li><strong>Sitios Corporativos:</strong> Presencia digital sólida para empresas.</li>
    <li><strong>Diseño Responsive:</strong> Adaptación perfecta a móviles, tablets y escritorio.</li>
    <li><strong>Optimización SEO:</strong> Estructura técnica para mejorar tu posición en Google.</li>
</ul>"#,
        ))
        .gallery_image("https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=300&fit=crop")
        .gallery_image("https://images.unsplash.com/photo-1547658719-da2b51169166?w=400&h=300&fit=crop")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_contain_one_record_per_slug() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), ServiceSlug::ALL.len());
        for slug in ServiceSlug::ALL {
            assert_eq!(catalog.get(slug).unwrap().slug, slug);
        }
    }

    #[test]
    fn should_look_up_web_by_raw_slug() {
        let catalog = Catalog::builtin().unwrap();
        let web = catalog.lookup("web").unwrap();
        assert_eq!(web.title, "Diseño Web & Desarrollo");
        assert_eq!(web.gallery.len(), 2);
        assert!(web.gallery[0].contains("photo-1460925895917"));
        assert!(web.gallery[1].contains("photo-1547658719"));
    }

    #[test]
    fn should_keep_three_images_for_branding() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.get(ServiceSlug::Diseno).unwrap().gallery.len(), 3);
    }

    #[test]
    fn should_return_none_for_unknown_slug() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.lookup("nonexistent").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn should_return_none_when_catalog_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.get(ServiceSlug::Web).is_none());
    }

    #[test]
    fn should_replace_duplicate_slug_with_later_record() {
        let first = ServiceRecord::builder(ServiceSlug::Web)
            .title("Old")
            .image("a")
            .description("d")
            .build()
            .unwrap();
        let second = ServiceRecord::builder(ServiceSlug::Web)
            .title("New")
            .image("b")
            .description("d")
            .build()
            .unwrap();
        let catalog = Catalog::new([first, second]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(ServiceSlug::Web).unwrap().title, "New");
    }

    #[test]
    fn should_iterate_in_slug_order() {
        let catalog = Catalog::builtin().unwrap();
        let slugs: Vec<_> = catalog.iter().map(|r| r.slug).collect();
        assert_eq!(slugs, ServiceSlug::ALL.to_vec());
    }
}
