use url::Url;
use v_htmlescape::escape;

use crate::config::RegistrationConfig;
use crate::plans::{Limit, Plan};

/// Presentational form of a plan
#[derive(Debug, Clone, PartialEq)]
pub struct PricingCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_label: String,
    pub features: Vec<String>,
    pub limits: Vec<String>,
    pub highlighted: bool,
    pub register_url: String,
    pub cta_label: String,
}

impl PricingCard {
    pub fn from_plan(plan: &Plan, registration: &RegistrationConfig) -> Self {
        let limits = [
            limit_label(plan.project_limit, "projetos"),
            limit_label(plan.testimonial_limit, "depoimentos"),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            description: plan.description.clone(),
            price_label: format_brl(plan.monthly_price),
            features: plan.features.clone(),
            limits,
            highlighted: plan.highlighted,
            register_url: registration_link(&registration.url, &plan.id),
            cta_label: format!("Escolher {}", plan.name),
        }
    }
}

pub fn cards_for(plans: &[Plan], registration: &RegistrationConfig) -> Vec<PricingCard> {
    plans
        .iter()
        .map(|plan| PricingCard::from_plan(plan, registration))
        .collect()
}

/// Format a price as Brazilian reais, e.g. `R$ 1.290,00`
pub fn format_brl(amount: f64) -> String {
    let cents = (amount.max(0.0) * 100.0).round() as u64;
    let reais = (cents / 100).to_string();

    let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
    for (idx, ch) in reais.chars().enumerate() {
        if idx > 0 && (reais.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("R$ {},{:02}", grouped, cents % 100)
}

/// `<base>?plan=<id>`, with the id percent-encoded
pub fn registration_link(base: &str, plan_id: &str) -> String {
    match Url::parse(base) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("plan", plan_id);
            url.to_string()
        }
        Err(_) => format!("{}?plan={}", base, plan_id),
    }
}

fn limit_label(limit: Option<Limit>, noun: &str) -> Option<String> {
    match limit? {
        Limit::Capped(n) => Some(format!("Até {} {}", n, noun)),
        Limit::Unbounded => {
            let mut label = noun.to_string();
            if let Some(first) = label.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            Some(format!("{} ilimitados", label))
        }
    }
}

pub fn render_pricing_cards(cards: &[PricingCard]) -> String {
    cards.iter().map(render_pricing_card).collect()
}

pub fn render_pricing_card(card: &PricingCard) -> String {
    let badge = if card.highlighted {
        r#"<div class="pricing-badge">Mais Popular</div>"#
    } else {
        ""
    };
    let items: String = card
        .features
        .iter()
        .chain(card.limits.iter())
        .map(|item| format!(r#"<li class="pricing-feature">{}</li>"#, escape(item)))
        .collect();

    format!(
        r#"<article class="pricing-card{popular}" data-plan="{id}">{badge}<header><h3>{name}</h3><p class="pricing-description">{description}</p></header><div class="pricing-price"><span class="pricing-amount">{price}</span><span class="pricing-period">/mês</span></div><ul class="pricing-features">{items}</ul><a class="pricing-cta" href="{href}">{cta}</a></article>"#,
        popular = if card.highlighted { " pricing-card-popular" } else { "" },
        id = escape(&card.id),
        badge = badge,
        name = escape(&card.name),
        description = escape(&card.description),
        price = escape(&card.price_label),
        items = items,
        href = escape(&card.register_url),
        cta = escape(&card.cta_label),
    )
}
