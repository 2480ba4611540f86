//! Sample catalog data.

use vitrine_commerce::catalog::{Category, Product};
use vitrine_commerce::ids::ProductId;
use vitrine_commerce::money::Money;

/// The sample digital products the storefront ships with.
///
/// Timestamps are assigned at seed time, once per process.
pub fn sample_products() -> Vec<Product> {
    let now = current_timestamp();
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Curso Completo de Marketing Digital".to_string(),
            description: "Aprenda as estratégias mais eficazes de marketing digital com este \
                          curso completo. Inclui módulos sobre SEO, redes sociais, email \
                          marketing e muito mais."
                .to_string(),
            price: Money::from_decimal(197.0),
            category: Category::Courses,
            image_url: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=400&h=300&fit=crop".to_string(),
            download_url: "/downloads/marketing-digital-course".to_string(),
            file_size: Some("2.5 GB".to_string()),
            format: Some("MP4 + PDF".to_string()),
            featured: true,
            tags: vec![
                "marketing".to_string(),
                "digital".to_string(),
                "curso".to_string(),
                "negócios".to_string(),
            ],
            created_at: now,
        },
        Product {
            id: ProductId::new("2"),
            name: "E-book: Guia do Empreendedor Digital".to_string(),
            description: "Um guia completo para quem quer começar seu negócio digital. Contém \
                          estratégias, dicas práticas e cases de sucesso."
                .to_string(),
            price: Money::from_decimal(47.0),
            category: Category::Ebooks,
            image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=300&fit=crop".to_string(),
            download_url: "/downloads/guia-empreendedor-digital".to_string(),
            file_size: Some("25 MB".to_string()),
            format: Some("PDF".to_string()),
            featured: true,
            tags: vec![
                "empreendedorismo".to_string(),
                "negócios".to_string(),
                "digital".to_string(),
            ],
            created_at: now,
        },
        Product {
            id: ProductId::new("3"),
            name: "Template Pack para Instagram".to_string(),
            description: "Pacote com 50 templates editáveis para Instagram Stories e Posts. \
                          Perfeito para empreendedores e criadores de conteúdo."
                .to_string(),
            price: Money::from_decimal(29.90),
            category: Category::Templates,
            image_url: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=400&h=300&fit=crop".to_string(),
            download_url: "/downloads/instagram-templates".to_string(),
            file_size: Some("120 MB".to_string()),
            format: Some("PSD + Canva".to_string()),
            featured: false,
            tags: vec![
                "templates".to_string(),
                "instagram".to_string(),
                "design".to_string(),
                "social media".to_string(),
            ],
            created_at: now,
        },
        Product {
            id: ProductId::new("4"),
            name: "Software de Gestão Financeira".to_string(),
            description: "Aplicativo completo para controle financeiro pessoal e empresarial. \
                          Interface intuitiva e relatórios detalhados."
                .to_string(),
            price: Money::from_decimal(97.0),
            category: Category::Software,
            image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=300&fit=crop".to_string(),
            download_url: "/downloads/gestao-financeira-app".to_string(),
            file_size: Some("45 MB".to_string()),
            format: Some("EXE + APK".to_string()),
            featured: false,
            tags: vec![
                "software".to_string(),
                "finanças".to_string(),
                "gestão".to_string(),
                "produtividade".to_string(),
            ],
            created_at: now,
        },
        Product {
            id: ProductId::new("5"),
            name: "Pack de Música Royalty Free".to_string(),
            description: "Coleção com 100 faixas de música sem direitos autorais para usar em \
                          seus projetos, vídeos e apresentações."
                .to_string(),
            price: Money::from_decimal(67.0),
            category: Category::Music,
            image_url: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400&h=300&fit=crop".to_string(),
            download_url: "/downloads/royalty-free-music".to_string(),
            file_size: Some("1.2 GB".to_string()),
            format: Some("MP3 + WAV".to_string()),
            featured: false,
            tags: vec![
                "música".to_string(),
                "royalty free".to_string(),
                "audio".to_string(),
                "produção".to_string(),
            ],
            created_at: now,
        },
        Product {
            id: ProductId::new("6"),
            name: "Curso de Desenvolvimento Web".to_string(),
            description: "Aprenda a criar sites e aplicações web do zero. HTML, CSS, \
                          JavaScript, React e muito mais."
                .to_string(),
            price: Money::from_decimal(247.0),
            category: Category::Courses,
            image_url: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=400&h=300&fit=crop".to_string(),
            download_url: "/downloads/web-development-course".to_string(),
            file_size: Some("4.8 GB".to_string()),
            format: Some("MP4 + Código".to_string()),
            featured: true,
            tags: vec![
                "programação".to_string(),
                "web".to_string(),
                "desenvolvimento".to_string(),
                "tecnologia".to_string(),
            ],
            created_at: now,
        },
    ]
}

/// Get current Unix timestamp in seconds.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_unique_ids() {
        let products = sample_products();
        let ids: std::collections::HashSet<_> =
            products.iter().map(|p| p.id.as_str().to_string()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_prices_are_positive() {
        assert!(sample_products().iter().all(|p| p.price.is_positive()));
    }
}
