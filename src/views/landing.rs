use v_htmlescape::escape;

use super::pricing::{render_pricing_cards, PricingCard};

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🎨",
        title: "Site Profissional",
        description: "Templates exclusivos para tatuagem. Mostre seu portfólio com a qualidade que ele merece.",
    },
    Feature {
        icon: "📅",
        title: "Agendamento Inteligente",
        description: "Permita que clientes vejam sua disponibilidade e solicitem horários sem trocar 50 mensagens.",
    },
    Feature {
        icon: "💰",
        title: "Orçamentos & Financeiro",
        description: "Formulários de orçamento detalhados e controle financeiro para saber exatamente quanto você ganha.",
    },
    Feature {
        icon: "📱",
        title: "Link na Bio",
        description: "Uma página otimizada para mobile que centraliza todos os seus links importantes.",
    },
    Feature {
        icon: "🔒",
        title: "Área do Cliente",
        description: "Histórico de sessões, cuidados pós-tattoo e termos de consentimento digital.",
    },
    Feature {
        icon: "🚀",
        title: "SEO Otimizado",
        description: "Seu estúdio aparecendo no Google quando procurarem por tatuagem na sua cidade.",
    },
];

/// Everything the landing page needs besides static copy
pub struct LandingPage<'a> {
    pub product_name: &'a str,
    pub cards: &'a [PricingCard],
}

pub fn render_landing_page(page: &LandingPage<'_>) -> String {
    let product = escape(page.product_name);

    format!(
        r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{product} | Gestão para tatuadores e estúdios</title>
</head>
<body>
<main>
    <section class="hero">
        <span class="hero-badge">Novidade: Gestão financeira integrada</span>
        <h1>Transforme sua <span class="accent">Arte</span> em um Negócio Profissional</h1>
        <p>Tenha seu site profissional, receba agendamentos e gerencie orçamentos em uma única plataforma. Feito para tatuadores e estúdios.</p>
        <div class="hero-actions">
            <a class="button-primary" href="/#pricing">Começar Agora</a>
            <a class="button-secondary" href="/demo">Ver Demonstração</a>
        </div>
    </section>

    <section id="features" class="features">
        <h2>Tudo que você precisa</h2>
        <p>Substitua planilhas, DMs do Instagram e ferramentas desconexas por uma solução unificada.</p>
        <div class="feature-grid">{features}</div>
    </section>

    <section id="pricing" class="pricing">
        <h2>Planos Simples e Transparentes</h2>
        <p>Comece grátis e cresça conforme sua agenda lota.</p>
        <div class="pricing-grid">{cards}</div>
    </section>

    <section class="final-cta">
        <h2>Pronto para profissionalizar seu estúdio?</h2>
        <p>Junte-se a centenas de artistas que já usam o {product} para focar no que importa: a arte.</p>
        <a class="button-primary" href="/#pricing">Criar Minha Conta Grátis</a>
    </section>
</main>
</body>
</html>
"##,
        product = product,
        features = render_features(),
        cards = render_pricing_cards(page.cards),
    )
}

fn render_features() -> String {
    FEATURES
        .iter()
        .map(|feature| {
            format!(
                r#"<div class="feature-card"><div class="feature-icon">{}</div><h3>{}</h3><p>{}</p></div>"#,
                feature.icon,
                escape(feature.title),
                escape(feature.description),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistrationConfig;
    use crate::plans::fallback_plans;
    use crate::views::pricing::cards_for;

    #[test]
    fn test_landing_page_contains_all_sections() {
        let registration = RegistrationConfig {
            url: "http://localhost:3001/register".to_string(),
        };
        let cards = cards_for(&fallback_plans(), &registration);
        let html = render_landing_page(&LandingPage {
            product_name: "InkManage",
            cards: &cards,
        });

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="features""#));
        assert!(html.contains(r#"id="pricing""#));
        assert_eq!(html.matches(r#"class="feature-card""#).count(), 6);
        assert_eq!(html.matches("<article").count(), 3);
        assert_eq!(html.matches("Mais Popular").count(), 1);
        assert!(html.contains("Escolher Estúdio"));
        assert!(html.contains("usam o InkManage"));
    }

    #[test]
    fn test_feature_copy_is_escaped() {
        let html = render_features();
        assert!(html.contains("Orçamentos &amp; Financeiro"));
    }
}
