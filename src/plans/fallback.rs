use super::models::Plan;

struct StaticPlan {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    monthly_price: f64,
    features: &'static [&'static str],
    highlighted: bool,
}

const FALLBACK_PLANS: [StaticPlan; 3] = [
    StaticPlan {
        id: "basic",
        name: "Iniciante",
        description: "Para quem está começando",
        monthly_price: 0.0,
        features: &["Site Básico", "Até 10 Projetos", "Link na Bio"],
        highlighted: false,
    },
    StaticPlan {
        id: "pro",
        name: "Profissional",
        description: "Para tatuadores com agenda ativa",
        monthly_price: 49.90,
        features: &["Site Completo", "Projetos Ilimitados", "Orçamentos", "Agenda"],
        highlighted: true,
    },
    StaticPlan {
        id: "studio",
        name: "Estúdio",
        description: "Para estúdios com múltiplos artistas",
        monthly_price: 129.90,
        features: &[
            "Multi-artistas",
            "Gestão Financeira",
            "Domínio Grátis",
            "Suporte Prioritário",
        ],
        highlighted: false,
    },
];

/// Plans shown when live pricing cannot be obtained
pub fn fallback_plans() -> Vec<Plan> {
    FALLBACK_PLANS
        .iter()
        .map(|p| Plan {
            id: p.id.to_string(),
            name: p.name.to_string(),
            description: p.description.to_string(),
            monthly_price: p.monthly_price,
            features: p.features.iter().map(|f| f.to_string()).collect(),
            project_limit: None,
            testimonial_limit: None,
            highlighted: p.highlighted,
        })
        .collect()
}
