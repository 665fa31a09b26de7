//! Project catalog.

use super::{featured, others, Featured, LocalizedText};

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
    pub stars: u32,
    pub forks: u32,
    pub featured: bool,
}

impl Featured for Project {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: LocalizedText::same("CV-Fitter"),
        description: LocalizedText::new(
            "AI-powered application that helps users optimize and refine their CVs for specific job positions. Uses artificial intelligence to rephrase content and include relevant keywords based on job descriptions, increasing chances of passing automated resume screenings.",
            "Aplicación impulsada por IA que ayuda a los usuarios a optimizar y mejorar sus CVs para posiciones específicas. Utiliza inteligencia artificial para reformular el contenido e incluir palabras clave relevantes según la descripción del puesto.",
        ),
        technologies: &["React", "Tailwind CSS", "Python", "Flask", "OpenAI API", "PyMuPDF", "PyPDF2", "BeautifulSoup"],
        github_url: "https://github.com/LinoCruz/cv-fitter",
        live_url: Some("https://cv-fitter.vercel.app"),
        stars: 0,
        forks: 0,
        featured: true,
    },
    Project {
        id: 2,
        title: LocalizedText::same("SafeMaps (iShelter)"),
        description: LocalizedText::new(
            "Hackathon project to help Ukrainian refugees find temporary housing. Hosts can offer space or donate, and refugees can find shelter. Includes features for announcements, user profiles, and messaging.",
            "Proyecto de hackathon para ayudar a refugiados ucranianos a encontrar alojamiento temporal. Los anfitriones pueden ofrecer espacio o donar, y los refugiados pueden encontrar refugio. Incluye anuncios, perfiles de usuario y mensajería.",
        ),
        technologies: &["React", "Tailwind CSS", "Radix UI", "Daisy UI", "Axios", "Python", "Django", "Django Rest Framework", "MapBox API", "PayPal API", "SQLite"],
        github_url: "https://github.com/CodingDojoHackathonTeam2/SafeMaps",
        live_url: None,
        stars: 2,
        forks: 0,
        featured: true,
    },
    Project {
        id: 3,
        title: LocalizedText::same("Enrolee"),
        description: LocalizedText::new(
            "Full-stack project for students, faculty, and staff to register for classes, conferences, workshops, and more. Students can search and enroll, while faculty can create events and track registrations.",
            "Proyecto full-stack para que estudiantes, profesores y personal se registren en clases, conferencias, talleres y más. Los estudiantes pueden buscar e inscribirse, mientras que los profesores pueden crear eventos y rastrear inscripciones.",
        ),
        technologies: &["HTML", "CSS", "JavaScript", "Python", "Flask", "MySQL"],
        github_url: "https://github.com/LinoCruz/enrolee",
        live_url: None,
        stars: 0,
        forks: 1,
        featured: false,
    },
    Project {
        id: 4,
        title: LocalizedText::same("Javaction Project"),
        description: LocalizedText::new(
            "Webapp for developers to practice algorithms in Java. Clone or fork the repo, run as a Spring Boot app, and access via browser.",
            "Aplicación web para que desarrolladores practiquen algoritmos en Java. Clona o haz fork del repositorio, ejecútalo como una app de Spring Boot y accede desde el navegador.",
        ),
        technologies: &["Java", "Spring Boot", "CSS", "JavaScript"],
        github_url: "https://github.com/LinoCruz/javaction-project",
        live_url: None,
        stars: 0,
        forks: 0,
        featured: false,
    },
    Project {
        id: 5,
        title: LocalizedText::same("Portfolio v2"),
        description: LocalizedText::new(
            "Personal portfolio website built with Rust and Dioxus. Showcases my projects, skills, and contact information. Open source and designed for modern web standards.",
            "Sitio web de portafolio personal construido con Rust y Dioxus. Muestra mis proyectos, habilidades e información de contacto. Código abierto y diseñado para estándares web modernos.",
        ),
        technologies: &["Rust", "Dioxus", "WebAssembly", "Fluent"],
        github_url: "https://github.com/LinoCruz/portfoliov2",
        live_url: None,
        stars: 0,
        forks: 0,
        featured: true,
    },
    Project {
        id: 6,
        title: LocalizedText::new(
            "Belcorp Service for Cosmetic Vendors",
            "Servicio Belcorp para Vendedores de Cosméticos",
        ),
        description: LocalizedText::new(
            "Service for cosmetic vendors to manage their products and sales, built with React and Node.js.",
            "Servicio para que los vendedores de cosméticos gestionen sus productos y ventas, construido con React y Node.js.",
        ),
        technologies: &["React", "Node.js", "Express", "MongoDB"],
        github_url: "https://github.com/khaeldev/hackathon-belcorp-service",
        live_url: None,
        stars: 0,
        forks: 0,
        featured: true,
    },
    Project {
        id: 7,
        title: LocalizedText::same("Article PCA"),
        description: LocalizedText::new(
            "Principal Component Analysis (PCA) study of Peruvian macroeconomic indicators (2020-2021), covering political transition and health crisis periods. Implements PCA using Python and Jupyter notebooks.",
            "Estudio de Análisis de Componentes Principales (PCA) de indicadores macroeconómicos peruanos (2020-2021), abarcando períodos de transición política y crisis sanitaria. Implementa PCA usando Python y Jupyter notebooks.",
        ),
        technologies: &["Python", "Jupyter Notebook", "NumPy", "pandas", "scikit-learn", "matplotlib", "seaborn"],
        github_url: "https://github.com/LinoCruz/article-pca",
        live_url: None,
        stars: 0,
        forks: 0,
        featured: false,
    },
];

pub fn featured_projects() -> Vec<&'static Project> {
    featured(PROJECTS)
}

pub fn other_projects() -> Vec<&'static Project> {
    others(PROJECTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn featured_and_other_cover_catalog_exactly() {
        let mut ids: Vec<u32> = featured_projects()
            .iter()
            .chain(other_projects().iter())
            .map(|p| p.id)
            .collect();
        ids.sort_unstable();
        let mut all: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        all.sort_unstable();
        assert_eq!(ids, all);
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn featured_keeps_declaration_order() {
        let ids: Vec<u32> = featured_projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 5, 6]);
    }

    #[test]
    fn live_links_are_never_blank() {
        for project in PROJECTS {
            if let Some(url) = project.live_url {
                assert!(url.starts_with("https://"), "{}", project.id);
            }
        }
    }
}
