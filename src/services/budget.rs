/// Highest price tier the Places API defines
pub const MAX_PRICE_LEVEL: u8 = 4;

const LUXURY_ADVICE: &str =
    "Com seu orçamento, você tem muitas opções de luxo e atividades exclusivas!";
const COMFORTABLE_ADVICE: &str =
    "Ótimo orçamento! Você poderá aproveitar muitas experiências sem se preocupar tanto.";
const MODERATE_ADVICE: &str =
    "Seu orçamento médio permite uma boa variedade de atividades e conforto. Explore bem as opções!";
const TIGHT_ADVICE: &str =
    "Com um orçamento mais restrito, priorize atividades gratuitas e econômicas. Há muitas opções charmosas!";
const DEFAULT_ADVICE: &str = "Seu orçamento parece adequado para as atividades sugeridas.";

pub struct BudgetAdvisor;

impl BudgetAdvisor {
    /// Map the trip budget to the highest acceptable price tier
    pub fn price_ceiling(budget: f64) -> u8 {
        if budget < 600.0 {
            1
        } else if budget < 2000.0 {
            2
        } else if budget < 4000.0 {
            3
        } else {
            MAX_PRICE_LEVEL
        }
    }

    pub fn advice(price_ceiling: u8) -> &'static str {
        match price_ceiling {
            4 => LUXURY_ADVICE,
            3 => COMFORTABLE_ADVICE,
            2 => MODERATE_ADVICE,
            0 | 1 => TIGHT_ADVICE,
            _ => DEFAULT_ADVICE,
        }
    }
}
