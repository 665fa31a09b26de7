//! Business-automation page content.

use super::LocalizedText;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutomationMetric {
    pub label: LocalizedText,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutomationProject {
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
    pub metrics: &'static [AutomationMetric],
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutomationVideo {
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub thumbnail: &'static str,
    pub duration: &'static str,
    pub youtube_url: &'static str,
}

impl AutomationVideo {
    pub fn thumbnail_url(&self) -> String {
        format!(
            "https://images.unsplash.com/photo-{}?w=500&h=280&fit=crop",
            self.thumbnail
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutomationService {
    /// Short glyph shown in the service card header.
    pub icon: &'static str,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub examples: &'static [LocalizedText],
}

static FEATURED_PROJECT: AutomationProject = AutomationProject {
    title: LocalizedText::new(
        "E-commerce Inventory Management System",
        "Sistema de Gestión de Inventarios E-commerce",
    ),
    description: LocalizedText::new(
        "Automated inventory tracking and reordering system that reduced manual work by 85% and prevented stockouts for a mid-size retailer.",
        "Sistema automatizado de seguimiento y reabastecimiento de inventarios que redujo el trabajo manual en un 85% y previno desabastecimientos para un minorista de tamaño mediano.",
    ),
    technologies: &["Python", "FastAPI", "PostgreSQL", "Celery", "Docker"],
    github_url: "https://github.com/yourusername/inventory-automation",
    live_url: Some("https://your-inventory-demo.com"),
    metrics: &[
        AutomationMetric {
            label: LocalizedText::new("Time Saved", "Tiempo Ahorrado"),
            value: "40 hours/week",
        },
        AutomationMetric {
            label: LocalizedText::new("Error Reduction", "Reducción de Errores"),
            value: "95%",
        },
        AutomationMetric {
            label: LocalizedText::same("ROI"),
            value: "300%",
        },
    ],
};

static FEATURED_VIDEO: AutomationVideo = AutomationVideo {
    title: LocalizedText::new(
        "Automating Business Processes with Python",
        "Automatizando Procesos de Negocio con Python",
    ),
    description: LocalizedText::new(
        "Complete walkthrough of building business automation tools, from data processing to workflow orchestration.",
        "Tutorial completo de construcción de herramientas de automatización empresarial, desde procesamiento de datos hasta orquestación de flujos de trabajo.",
    ),
    thumbnail: "1560472354-b33ff0c44a43",
    duration: "1:25:45",
    youtube_url: "https://youtube.com/watch?v=automation-example",
};

static SERVICES: &[AutomationService] = &[
    AutomationService {
        icon: "⚙",
        title: LocalizedText::new("Process Automation", "Automatización de Procesos"),
        description: LocalizedText::new(
            "Streamline repetitive tasks and workflows to save time and reduce errors.",
            "Optimiza tareas repetitivas y flujos de trabajo para ahorrar tiempo y reducir errores.",
        ),
        examples: &[
            LocalizedText::new("Data entry automation", "Automatización de entrada de datos"),
            LocalizedText::new("Report generation", "Generación de reportes"),
            LocalizedText::new("Email workflows", "Flujos de correo electrónico"),
            LocalizedText::new("File processing", "Procesamiento de archivos"),
        ],
    },
    AutomationService {
        icon: "✦",
        title: LocalizedText::new("AI-Powered Solutions", "Soluciones con IA"),
        description: LocalizedText::new(
            "Leverage artificial intelligence to enhance decision-making and customer interactions.",
            "Aprovecha la inteligencia artificial para mejorar la toma de decisiones e interacciones con clientes.",
        ),
        examples: &[
            LocalizedText::same("Chatbots"),
            LocalizedText::new("Document analysis", "Análisis de documentos"),
            LocalizedText::new("Predictive analytics", "Análisis predictivo"),
            LocalizedText::new("Content generation", "Generación de contenido"),
        ],
    },
    AutomationService {
        icon: "⇄",
        title: LocalizedText::new("System Integration", "Integración de Sistemas"),
        description: LocalizedText::new(
            "Connect different business systems to create seamless data flow and operations.",
            "Conecta diferentes sistemas empresariales para crear un flujo de datos y operaciones sin interrupciones.",
        ),
        examples: &[
            LocalizedText::new("API integrations", "Integraciones de API"),
            LocalizedText::new("Database synchronization", "Sincronización de bases de datos"),
            LocalizedText::new("CRM automation", "Automatización de CRM"),
            LocalizedText::new("E-commerce tools", "Herramientas de e-commerce"),
        ],
    },
];

pub fn featured_automation_project() -> &'static AutomationProject {
    &FEATURED_PROJECT
}

pub fn featured_automation_video() -> &'static AutomationVideo {
    &FEATURED_VIDEO
}

pub fn automation_services() -> &'static [AutomationService] {
    SERVICES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn every_service_is_translated() {
        for service in automation_services() {
            assert_ne!(service.title.get(Language::Es), service.title.en);
            assert_ne!(service.description.get(Language::Es), service.description.en);
            assert_eq!(service.examples.len(), 4);
        }
    }

    #[test]
    fn untranslated_examples_render_in_english() {
        let ai = &automation_services()[1];
        assert_eq!(ai.examples[0].get(Language::Es), "Chatbots");
    }

    #[test]
    fn featured_project_metrics_render_in_spanish() {
        let labels: Vec<_> = featured_automation_project()
            .metrics
            .iter()
            .map(|m| m.label.get(Language::Es))
            .collect();
        assert_eq!(labels, vec!["Tiempo Ahorrado", "Reducción de Errores", "ROI"]);
    }
}
