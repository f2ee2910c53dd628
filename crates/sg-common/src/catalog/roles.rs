//! Role roadmap data, derived from the market-posting analysis exports.

use once_cell::sync::Lazy;

use crate::{
    JobRole, LearningResource, Priority, RoleSkills, Skill, SkillCategory, SuggestedProject,
};

use Priority::{High, Low, Medium};
use SkillCategory::{Concepts, Languages, SoftSkills, Tools};

fn skill(
    id: &str,
    name: &str,
    category: SkillCategory,
    demand_percent: u8,
    priority: Priority,
    description: &str,
) -> Skill {
    Skill {
        id: id.into(),
        name: name.into(),
        category,
        demand_percent,
        priority,
        description: description.into(),
        resource: None,
        project: None,
    }
}

fn resource(
    title: &str,
    platform: &str,
    url: &str,
    duration: &str,
    level: &str,
) -> Option<LearningResource> {
    Some(LearningResource {
        title: title.into(),
        platform: platform.into(),
        url: url.into(),
        duration: duration.into(),
        level: level.into(),
    })
}

fn project(title: &str, description: &str) -> Option<SuggestedProject> {
    Some(SuggestedProject {
        title: title.into(),
        description: description.into(),
    })
}

fn data_engineer() -> JobRole {
    JobRole {
        id: "data-engineer".into(),
        title: "Data Engineer".into(),
        description: "Diseña y construye sistemas de datos escalables".into(),
        icon: "🔧".into(),
        skills: RoleSkills {
            junior: vec![
                Skill {
                    resource: resource(
                        "Python para Data Engineering",
                        "Coursera",
                        "https://coursera.org",
                        "40 horas",
                        "Principiante",
                    ),
                    project: project(
                        "ETL Pipeline Básico",
                        "Crear un pipeline de extracción y transformación de datos con pandas",
                    ),
                    ..skill(
                        "python",
                        "Python",
                        Languages,
                        92,
                        High,
                        "Lenguaje principal para procesamiento de datos",
                    )
                },
                Skill {
                    resource: resource(
                        "SQL Fundamentals",
                        "DataCamp",
                        "https://datacamp.com",
                        "20 horas",
                        "Principiante",
                    ),
                    project: project(
                        "Diseño de Schema",
                        "Diseñar un modelo de datos para un e-commerce",
                    ),
                    ..skill(
                        "sql",
                        "SQL",
                        Languages,
                        95,
                        High,
                        "Consultas y gestión de bases de datos relacionales",
                    )
                },
                Skill {
                    resource: resource(
                        "Git & GitHub Masterclass",
                        "Udemy",
                        "https://udemy.com",
                        "10 horas",
                        "Principiante",
                    ),
                    ..skill("git", "Git", Tools, 88, High, "Control de versiones y colaboración")
                },
                Skill {
                    resource: resource(
                        "Docker para Desarrolladores",
                        "Platzi",
                        "https://platzi.com",
                        "15 horas",
                        "Intermedio",
                    ),
                    ..skill(
                        "docker",
                        "Docker",
                        Tools,
                        75,
                        Medium,
                        "Containerización de aplicaciones",
                    )
                },
                skill(
                    "etl-concepts",
                    "ETL/ELT",
                    Concepts,
                    85,
                    High,
                    "Procesos de extracción, transformación y carga",
                ),
                skill(
                    "data-modeling",
                    "Data Modeling",
                    Concepts,
                    72,
                    Medium,
                    "Diseño de estructuras de datos",
                ),
                skill(
                    "communication",
                    "Comunicación",
                    SoftSkills,
                    65,
                    Medium,
                    "Capacidad de explicar conceptos técnicos",
                ),
                skill(
                    "problem-solving",
                    "Resolución de problemas",
                    SoftSkills,
                    78,
                    High,
                    "Análisis y solución de problemas complejos",
                ),
            ],
            mid: vec![
                skill(
                    "python",
                    "Python",
                    Languages,
                    95,
                    High,
                    "Lenguaje principal para procesamiento de datos",
                ),
                skill(
                    "sql",
                    "SQL Avanzado",
                    Languages,
                    92,
                    High,
                    "Optimización de queries y procedimientos almacenados",
                ),
                skill(
                    "spark",
                    "Apache Spark",
                    Tools,
                    82,
                    High,
                    "Procesamiento de datos distribuido",
                ),
                skill(
                    "airflow",
                    "Apache Airflow",
                    Tools,
                    78,
                    High,
                    "Orquestación de workflows",
                ),
                skill("aws", "AWS", Tools, 85, High, "Servicios cloud de Amazon"),
                skill(
                    "data-warehouse",
                    "Data Warehousing",
                    Concepts,
                    80,
                    High,
                    "Diseño y gestión de data warehouses",
                ),
                skill(
                    "leadership",
                    "Liderazgo técnico",
                    SoftSkills,
                    60,
                    Medium,
                    "Guiar equipos técnicos",
                ),
            ],
            senior: vec![
                skill(
                    "architecture",
                    "Arquitectura de Datos",
                    Concepts,
                    90,
                    High,
                    "Diseño de sistemas de datos enterprise",
                ),
                skill(
                    "kubernetes",
                    "Kubernetes",
                    Tools,
                    75,
                    Medium,
                    "Orquestación de containers a escala",
                ),
                skill(
                    "streaming",
                    "Data Streaming",
                    Concepts,
                    70,
                    Medium,
                    "Kafka, Kinesis, procesamiento en tiempo real",
                ),
                skill(
                    "mentoring",
                    "Mentoring",
                    SoftSkills,
                    65,
                    High,
                    "Desarrollo de talento junior",
                ),
            ],
        },
    }
}

fn frontend_developer() -> JobRole {
    JobRole {
        id: "frontend-developer".into(),
        title: "Frontend Developer".into(),
        description: "Crea interfaces de usuario modernas y responsivas".into(),
        icon: "🎨".into(),
        skills: RoleSkills {
            junior: vec![
                Skill {
                    resource: resource(
                        "HTML & CSS Completo",
                        "freeCodeCamp",
                        "https://freecodecamp.org",
                        "30 horas",
                        "Principiante",
                    ),
                    ..skill(
                        "html-css",
                        "HTML/CSS",
                        Languages,
                        98,
                        High,
                        "Fundamentos del desarrollo web",
                    )
                },
                Skill {
                    resource: resource(
                        "JavaScript Moderno",
                        "Udemy",
                        "https://udemy.com",
                        "50 horas",
                        "Principiante",
                    ),
                    ..skill(
                        "javascript",
                        "JavaScript",
                        Languages,
                        96,
                        High,
                        "Lenguaje de programación web",
                    )
                },
                Skill {
                    resource: resource(
                        "React - La Guía Completa",
                        "Udemy",
                        "https://udemy.com",
                        "40 horas",
                        "Intermedio",
                    ),
                    ..skill(
                        "react",
                        "React",
                        Tools,
                        85,
                        High,
                        "Librería para construir interfaces",
                    )
                },
                skill("git-fe", "Git", Tools, 90, High, "Control de versiones"),
                skill(
                    "responsive",
                    "Responsive Design",
                    Concepts,
                    92,
                    High,
                    "Diseño adaptable a dispositivos",
                ),
                skill(
                    "teamwork",
                    "Trabajo en equipo",
                    SoftSkills,
                    75,
                    Medium,
                    "Colaboración efectiva",
                ),
            ],
            mid: vec![
                skill(
                    "typescript",
                    "TypeScript",
                    Languages,
                    88,
                    High,
                    "JavaScript con tipos estáticos",
                ),
                skill(
                    "nextjs",
                    "Next.js",
                    Tools,
                    72,
                    Medium,
                    "Framework React para producción",
                ),
                skill("testing", "Testing", Concepts, 78, High, "Jest, Testing Library"),
                skill(
                    "performance",
                    "Web Performance",
                    Concepts,
                    70,
                    Medium,
                    "Optimización de rendimiento",
                ),
            ],
            senior: vec![
                skill(
                    "architecture-fe",
                    "Arquitectura Frontend",
                    Concepts,
                    82,
                    High,
                    "Patrones y escalabilidad",
                ),
                skill(
                    "microfrontends",
                    "Micro Frontends",
                    Concepts,
                    55,
                    Low,
                    "Arquitectura distribuida",
                ),
                skill(
                    "technical-leadership",
                    "Liderazgo técnico",
                    SoftSkills,
                    68,
                    High,
                    "Guiar decisiones técnicas",
                ),
            ],
        },
    }
}

fn cybersecurity_analyst() -> JobRole {
    JobRole {
        id: "cybersecurity-analyst".into(),
        title: "Cybersecurity Analyst".into(),
        description: "Protege sistemas y datos de amenazas".into(),
        icon: "🔒".into(),
        skills: RoleSkills {
            junior: vec![
                Skill {
                    resource: resource(
                        "CompTIA Network+",
                        "CompTIA",
                        "https://comptia.org",
                        "60 horas",
                        "Principiante",
                    ),
                    ..skill(
                        "networking",
                        "Networking",
                        Concepts,
                        90,
                        High,
                        "Fundamentos de redes TCP/IP",
                    )
                },
                skill(
                    "linux",
                    "Linux",
                    Tools,
                    88,
                    High,
                    "Administración de sistemas Linux",
                ),
                skill(
                    "python-sec",
                    "Python",
                    Languages,
                    75,
                    Medium,
                    "Scripting para automatización",
                ),
                skill(
                    "security-fundamentals",
                    "Security Fundamentals",
                    Concepts,
                    95,
                    High,
                    "CIA triad, autenticación, autorización",
                ),
                skill(
                    "attention-detail",
                    "Atención al detalle",
                    SoftSkills,
                    85,
                    High,
                    "Identificar anomalías y patrones",
                ),
            ],
            mid: vec![
                skill(
                    "siem",
                    "SIEM Tools",
                    Tools,
                    82,
                    High,
                    "Splunk, QRadar, análisis de logs",
                ),
                skill(
                    "incident-response",
                    "Incident Response",
                    Concepts,
                    85,
                    High,
                    "Respuesta a incidentes de seguridad",
                ),
                skill(
                    "threat-hunting",
                    "Threat Hunting",
                    Concepts,
                    70,
                    Medium,
                    "Búsqueda proactiva de amenazas",
                ),
            ],
            senior: vec![
                skill(
                    "security-architecture",
                    "Security Architecture",
                    Concepts,
                    78,
                    High,
                    "Diseño de arquitecturas seguras",
                ),
                skill(
                    "risk-management",
                    "Risk Management",
                    Concepts,
                    72,
                    High,
                    "Evaluación y gestión de riesgos",
                ),
            ],
        },
    }
}

fn backend_developer() -> JobRole {
    JobRole {
        id: "backend-developer".into(),
        title: "Backend Developer".into(),
        description: "Construye la lógica del servidor y APIs".into(),
        icon: "⚙️".into(),
        skills: RoleSkills {
            junior: vec![
                Skill {
                    resource: resource(
                        "Node.js Completo",
                        "Udemy",
                        "https://udemy.com",
                        "35 horas",
                        "Principiante",
                    ),
                    ..skill(
                        "nodejs",
                        "Node.js",
                        Tools,
                        82,
                        High,
                        "Runtime de JavaScript para servidor",
                    )
                },
                skill(
                    "sql-backend",
                    "SQL",
                    Languages,
                    90,
                    High,
                    "Bases de datos relacionales",
                ),
                skill(
                    "rest-api",
                    "REST APIs",
                    Concepts,
                    95,
                    High,
                    "Diseño de APIs RESTful",
                ),
                skill("git-backend", "Git", Tools, 88, High, "Control de versiones"),
                skill(
                    "debugging",
                    "Debugging",
                    SoftSkills,
                    80,
                    High,
                    "Resolución de problemas en código",
                ),
            ],
            mid: vec![
                skill("docker-backend", "Docker", Tools, 78, High, "Containerización"),
                skill(
                    "microservices",
                    "Microservices",
                    Concepts,
                    72,
                    Medium,
                    "Arquitectura de microservicios",
                ),
                skill(
                    "caching",
                    "Caching (Redis)",
                    Tools,
                    68,
                    Medium,
                    "Estrategias de caché",
                ),
            ],
            senior: vec![
                skill(
                    "system-design",
                    "System Design",
                    Concepts,
                    85,
                    High,
                    "Diseño de sistemas escalables",
                ),
                skill(
                    "cloud-backend",
                    "Cloud Architecture",
                    Tools,
                    80,
                    High,
                    "AWS, GCP, Azure",
                ),
            ],
        },
    }
}

fn devops_engineer() -> JobRole {
    JobRole {
        id: "devops-engineer".into(),
        title: "DevOps Engineer".into(),
        description: "Automatiza y optimiza procesos de desarrollo".into(),
        icon: "🚀".into(),
        skills: RoleSkills {
            junior: vec![
                skill(
                    "linux-devops",
                    "Linux",
                    Tools,
                    92,
                    High,
                    "Administración de sistemas",
                ),
                skill("docker-devops", "Docker", Tools, 90, High, "Containerización"),
                skill("git-devops", "Git", Tools, 95, High, "Control de versiones"),
                skill("bash", "Bash/Shell", Languages, 85, High, "Scripting de shell"),
                skill(
                    "ci-cd",
                    "CI/CD Basics",
                    Concepts,
                    88,
                    High,
                    "Jenkins, GitHub Actions",
                ),
            ],
            mid: vec![
                skill(
                    "kubernetes-devops",
                    "Kubernetes",
                    Tools,
                    82,
                    High,
                    "Orquestación de containers",
                ),
                skill(
                    "terraform",
                    "Terraform",
                    Tools,
                    78,
                    High,
                    "Infrastructure as Code",
                ),
                skill("aws-devops", "AWS", Tools, 85, High, "Servicios cloud"),
            ],
            senior: vec![
                skill(
                    "sre",
                    "SRE Practices",
                    Concepts,
                    75,
                    High,
                    "Site Reliability Engineering",
                ),
                skill(
                    "security-devops",
                    "DevSecOps",
                    Concepts,
                    70,
                    Medium,
                    "Seguridad en pipelines",
                ),
            ],
        },
    }
}

static ROLES: Lazy<Vec<JobRole>> = Lazy::new(|| {
    vec![
        data_engineer(),
        frontend_developer(),
        cybersecurity_analyst(),
        backend_developer(),
        devops_engineer(),
    ]
});

pub(super) fn all() -> &'static [JobRole] {
    &ROLES
}
