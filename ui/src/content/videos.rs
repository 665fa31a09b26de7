//! Video catalog.

use super::{featured, others, Featured, LocalizedText};

/// Videos per carousel slide in the "more videos" strip.
pub const VIDEOS_PER_SLIDE: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub id: u32,
    pub title: LocalizedText,
    pub description: LocalizedText,
    /// Unsplash photo id used for the thumbnail.
    pub thumbnail: &'static str,
    pub duration: &'static str,
    pub views: &'static str,
    pub category: &'static str,
    pub youtube_url: &'static str,
    pub featured: bool,
}

impl Video {
    pub fn thumbnail_url(&self) -> String {
        format!(
            "https://images.unsplash.com/photo-{}?w=500&h=280&fit=crop",
            self.thumbnail
        )
    }
}

impl Featured for Video {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

pub static VIDEOS: &[Video] = &[
    Video {
        id: 1,
        title: LocalizedText::new(
            "Building a Full-Stack React Application",
            "Construyendo una Aplicación Full-Stack con React",
        ),
        description: LocalizedText::new(
            "Complete tutorial on building a modern full-stack application with React, Node.js, and MongoDB.",
            "Tutorial completo para construir una aplicación full-stack moderna con React, Node.js y MongoDB.",
        ),
        thumbnail: "1633356122544-f134324a6cee",
        duration: "2:45:30",
        views: "15.2K",
        category: "React",
        youtube_url: "https://youtube.com/watch?v=example1",
        featured: true,
    },
    Video {
        id: 2,
        title: LocalizedText::new(
            "Advanced TypeScript Patterns",
            "Patrones Avanzados de TypeScript",
        ),
        description: LocalizedText::new(
            "Deep dive into advanced TypeScript patterns and best practices for large-scale applications.",
            "Análisis profundo de patrones avanzados de TypeScript y buenas prácticas para aplicaciones a gran escala.",
        ),
        thumbnail: "1627398242454-45a1465c2479",
        duration: "1:32:15",
        views: "8.7K",
        category: "TypeScript",
        youtube_url: "https://youtube.com/watch?v=example2",
        featured: true,
    },
    Video {
        id: 3,
        title: LocalizedText::new("Docker for Developers", "Docker para Desarrolladores"),
        description: LocalizedText::new(
            "Learn how to containerize your applications and streamline your development workflow.",
            "Aprende a contenerizar tus aplicaciones y agilizar tu flujo de desarrollo.",
        ),
        thumbnail: "1605745341112-85968b19335b",
        duration: "58:42",
        views: "12.1K",
        category: "DevOps",
        youtube_url: "https://youtube.com/watch?v=example3",
        featured: true,
    },
    Video {
        id: 4,
        title: LocalizedText::new(
            "API Design Best Practices",
            "Buenas Prácticas de Diseño de APIs",
        ),
        description: LocalizedText::new(
            "Essential principles for designing robust and scalable REST APIs.",
            "Principios esenciales para diseñar APIs REST robustas y escalables.",
        ),
        thumbnail: "1558494949-ef010cbdcc31",
        duration: "45:20",
        views: "6.3K",
        category: "Backend",
        youtube_url: "https://youtube.com/watch?v=example4",
        featured: false,
    },
    Video {
        id: 5,
        title: LocalizedText::new(
            "CSS Grid & Flexbox Mastery",
            "Dominando CSS Grid y Flexbox",
        ),
        description: LocalizedText::new(
            "Master modern CSS layout techniques with practical examples.",
            "Domina las técnicas modernas de maquetación CSS con ejemplos prácticos.",
        ),
        thumbnail: "1523437113738-bbd3cc89fb19",
        duration: "1:15:30",
        views: "9.8K",
        category: "CSS",
        youtube_url: "https://youtube.com/watch?v=example5",
        featured: false,
    },
    Video {
        id: 6,
        title: LocalizedText::new(
            "JavaScript Performance Optimization",
            "Optimización de Rendimiento en JavaScript",
        ),
        description: LocalizedText::new(
            "Techniques to make your JavaScript applications faster and more efficient.",
            "Técnicas para hacer tus aplicaciones JavaScript más rápidas y eficientes.",
        ),
        thumbnail: "1607706189992-eae578626c86",
        duration: "52:15",
        views: "11.4K",
        category: "JavaScript",
        youtube_url: "https://youtube.com/watch?v=example6",
        featured: false,
    },
];

pub fn featured_videos() -> Vec<&'static Video> {
    featured(VIDEOS)
}

pub fn other_videos() -> Vec<&'static Video> {
    others(VIDEOS)
}
