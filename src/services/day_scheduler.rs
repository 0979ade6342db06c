//! Greedy assignment of scored points into morning / afternoon / evening slots.
//!
//! Every day runs the same passes over the points nobody has used yet, best
//! score first: a full-day activity claims the morning and blocks the
//! afternoon, then evening, morning and afternoon are filled by time-of-day
//! suitability, and finally any empty slot takes the best remaining point
//! short enough to fit it. A point used on one day is never offered again.
//! There is no backtracking, so early days get the strongest candidates.

use std::collections::HashSet;

use log::debug;

use crate::models::{
    itinerary::ScheduleDay,
    point::{DayPeriod, PointOfInterest, ScoredPoint},
};

const MORNING_LABEL: &str = "8h da Manhã";
const AFTERNOON_LABEL: &str = "13h da Tarde";
const EVENING_LABEL: &str = "19h da Noite";

pub const FREE_DAY_MESSAGE: &str =
    "Nenhuma atividade específica sugerida para este dia. Explore por conta própria!";

const MAPS_LINK_BASE: &str = "http://maps.google.com/?q=place_id:";

/// Longest activity, in hours, each slot accepts during the fill pass
#[derive(Debug, Clone)]
pub struct SlotLimits {
    pub morning_max_hours: u8,
    pub afternoon_max_hours: u8,
    pub evening_max_hours: u8,
}

impl Default for SlotLimits {
    fn default() -> Self {
        Self {
            morning_max_hours: 3,
            afternoon_max_hours: 4,
            evening_max_hours: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'a> {
    Empty,
    /// Afternoon held by a full-day activity that started in the morning
    Reserved,
    Filled(&'a PointOfInterest),
}

impl<'a> Slot<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn point(&self) -> Option<&'a PointOfInterest> {
        match *self {
            Slot::Filled(point) => Some(point),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DayPlan<'a> {
    pub morning: Slot<'a>,
    pub afternoon: Slot<'a>,
    pub evening: Slot<'a>,
}

impl<'a> DayPlan<'a> {
    fn new() -> Self {
        Self {
            morning: Slot::Empty,
            afternoon: Slot::Empty,
            evening: Slot::Empty,
        }
    }

    pub fn points(&self) -> impl Iterator<Item = &'a PointOfInterest> {
        [self.morning, self.afternoon, self.evening]
            .into_iter()
            .filter_map(|slot| slot.point())
    }

    /// Activity lines in slot order, or the free-day message
    pub fn render(&self) -> Vec<String> {
        let entries: Vec<String> = [
            (MORNING_LABEL, self.morning),
            (AFTERNOON_LABEL, self.afternoon),
            (EVENING_LABEL, self.evening),
        ]
        .into_iter()
        .filter_map(|(label, slot)| slot.point().map(|point| format_entry(label, point)))
        .collect();

        if entries.is_empty() {
            vec![FREE_DAY_MESSAGE.to_string()]
        } else {
            entries
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DayScheduler {
    pub limits: SlotLimits,
}

impl DayScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SlotLimits) -> Self {
        Self { limits }
    }

    /// Build `days` consecutive schedules. `used` collects the `place_id` of
    /// every point assigned and is consulted before each assignment.
    pub fn schedule(
        &self,
        pool: &[ScoredPoint],
        days: u32,
        used: &mut HashSet<String>,
    ) -> Vec<ScheduleDay> {
        (1..=days)
            .map(|day| {
                let plan = self.plan_day(pool, used);
                debug!(
                    "Day {}: {} activities, {} points still unused",
                    day,
                    plan.points().count(),
                    pool.len() - used.len().min(pool.len())
                );
                ScheduleDay {
                    day,
                    activities: plan.render(),
                }
            })
            .collect()
    }

    pub fn plan_day<'a>(&self, pool: &'a [ScoredPoint], used: &mut HashSet<String>) -> DayPlan<'a> {
        let mut today: Vec<&'a ScoredPoint> = pool
            .iter()
            .filter(|candidate| !used.contains(&candidate.point.place_id))
            .collect();
        today.sort_by(|a, b| b.score.cmp(&a.score));

        let mut plan = DayPlan::new();

        if let Some(point) = claim_first(&today, used, DayPeriod::FullDay) {
            plan.morning = Slot::Filled(point);
            plan.afternoon = Slot::Reserved;
        }
        if plan.evening.is_empty() {
            if let Some(point) = claim_first(&today, used, DayPeriod::Evening) {
                plan.evening = Slot::Filled(point);
            }
        }
        if plan.morning.is_empty() {
            if let Some(point) = claim_first(&today, used, DayPeriod::Morning) {
                plan.morning = Slot::Filled(point);
            }
        }
        if plan.afternoon.is_empty() {
            if let Some(point) = claim_first(&today, used, DayPeriod::Afternoon) {
                plan.afternoon = Slot::Filled(point);
            }
        }

        self.fill_remaining(&mut plan, &today, used);
        plan
    }

    // Each leftover point goes to the first empty slot it is short enough for.
    fn fill_remaining<'a>(
        &self,
        plan: &mut DayPlan<'a>,
        today: &[&'a ScoredPoint],
        used: &mut HashSet<String>,
    ) {
        for &candidate in today {
            let point = &candidate.point;
            if used.contains(&point.place_id) {
                continue;
            }

            let hours = point.duration_hours;
            let slot = if plan.morning.is_empty() && hours <= self.limits.morning_max_hours {
                &mut plan.morning
            } else if plan.afternoon.is_empty() && hours <= self.limits.afternoon_max_hours {
                &mut plan.afternoon
            } else if plan.evening.is_empty() && hours <= self.limits.evening_max_hours {
                &mut plan.evening
            } else {
                continue;
            };

            *slot = Slot::Filled(point);
            used.insert(point.place_id.clone());
        }
    }
}

fn claim_first<'a>(
    today: &[&'a ScoredPoint],
    used: &mut HashSet<String>,
    period: DayPeriod,
) -> Option<&'a PointOfInterest> {
    let point = today
        .iter()
        .map(|&candidate| &candidate.point)
        .find(|point| !used.contains(&point.place_id) && point.suits(period))?;
    used.insert(point.place_id.clone());
    Some(point)
}

fn format_entry(label: &str, point: &PointOfInterest) -> String {
    let name = escape_html(&point.name);
    let link = if point.place_id.is_empty() {
        name
    } else {
        format!(
            "<a href='{}{}' target='_blank' rel='noopener noreferrer'>{}</a>",
            MAPS_LINK_BASE,
            escape_html(&point.place_id),
            name
        )
    };
    format!(
        "{}: {} ({}h, {})",
        label, link, point.duration_hours, point.price_label
    )
}

// Entries are inserted as HTML by the client.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::point::CostBucket;

    fn scored(id: &str, score: u32, hours: u8, periods: &[DayPeriod]) -> ScoredPoint {
        ScoredPoint {
            point: PointOfInterest {
                place_id: id.to_string(),
                name: format!("Place {}", id),
                types: vec![],
                price_level: Some(1),
                interests: vec![],
                duration_hours: hours,
                cost: CostBucket::Low,
                price_label: "Barato".to_string(),
                best_periods: periods.to_vec(),
            },
            score,
        }
    }

    fn ids(slot: Slot<'_>) -> Option<String> {
        slot.point().map(|p| p.place_id.clone())
    }

    use DayPeriod::*;

    #[test]
    fn test_day_count_matches_request() {
        let pool = vec![scored("a", 200, 2, &[Morning, Afternoon])];
        let mut used = HashSet::new();
        let days = DayScheduler::new().schedule(&pool, 4, &mut used);
        assert_eq!(days.len(), 4);
        assert_eq!(days.iter().map(|d| d.day).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_points_never_repeat_across_days() {
        let pool: Vec<ScoredPoint> = (0..10)
            .map(|i| {
                let periods: &[DayPeriod] = match i % 4 {
                    0 => &[Morning, Afternoon],
                    1 => &[Evening],
                    2 => &[FullDay],
                    _ => &[],
                };
                scored(&format!("p{}", i), 300 - i * 10, (i % 5 + 1) as u8, periods)
            })
            .collect();

        let scheduler = DayScheduler::new();
        let mut used = HashSet::new();
        let mut seen = HashSet::new();
        for _ in 0..5 {
            let plan = scheduler.plan_day(&pool, &mut used);
            for point in plan.points() {
                assert!(seen.insert(point.place_id.clone()), "{} reused", point.place_id);
            }
        }
        assert_eq!(seen, used);
    }

    #[test]
    fn test_full_day_reserves_afternoon() {
        let pool = vec![
            scored("park", 250, 5, &[FullDay]),
            scored("cafe", 240, 1, &[Morning, Afternoon]),
            scored("walk", 230, 2, &[]),
        ];
        let mut used = HashSet::new();
        let plan = DayScheduler::new().plan_day(&pool, &mut used);

        assert_eq!(ids(plan.morning), Some("park".to_string()));
        assert_eq!(plan.afternoon, Slot::Reserved);
        // cafe suits the afternoon and fits by duration, but the slot is held
        assert_eq!(ids(plan.evening), Some("cafe".to_string()));
        assert!(!used.contains("walk"));

        let lines = plan.render();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("8h da Manhã: "));
        assert!(lines[1].starts_with("19h da Noite: "));
    }

    #[test]
    fn test_one_full_day_activity_per_day() {
        let pool = vec![
            scored("zoo", 260, 4, &[FullDay]),
            scored("park", 250, 5, &[FullDay]),
        ];
        let mut used = HashSet::new();
        let days = DayScheduler::new().schedule(&pool, 2, &mut used);

        assert_eq!(days[0].activities.len(), 1);
        assert!(days[0].activities[0].contains("place_id:zoo"));
        assert_eq!(days[1].activities.len(), 1);
        assert!(days[1].activities[0].contains("place_id:park"));
    }

    #[test]
    fn test_period_passes_then_fill() {
        let pool = vec![
            scored("bar", 300, 2, &[Evening]),
            scored("museum", 290, 3, &[Morning, Afternoon]),
            scored("gallery", 280, 2, &[Morning, Afternoon]),
            scored("spare", 270, 2, &[Morning, Afternoon]),
        ];
        let mut used = HashSet::new();
        let plan = DayScheduler::new().plan_day(&pool, &mut used);

        assert_eq!(ids(plan.evening), Some("bar".to_string()));
        assert_eq!(ids(plan.morning), Some("museum".to_string()));
        assert_eq!(ids(plan.afternoon), Some("gallery".to_string()));
        assert!(!used.contains("spare"));
    }

    #[test]
    fn test_periodless_points_fill_by_duration() {
        let pool = vec![
            scored("long", 300, 5, &[]),
            scored("four", 290, 4, &[]),
            scored("three", 280, 3, &[]),
            scored("two", 270, 2, &[]),
        ];
        let mut used = HashSet::new();
        let plan = DayScheduler::new().plan_day(&pool, &mut used);

        assert_eq!(ids(plan.afternoon), Some("four".to_string()));
        assert_eq!(ids(plan.morning), Some("three".to_string()));
        assert_eq!(ids(plan.evening), Some("two".to_string()));
        assert!(!used.contains("long"));
    }

    #[test]
    fn test_empty_day_gets_free_day_message() {
        let pool = vec![scored("only", 200, 2, &[Morning])];
        let mut used = HashSet::new();
        let days = DayScheduler::new().schedule(&pool, 2, &mut used);

        assert_eq!(days[0].activities.len(), 1);
        assert!(days[0].activities[0].contains("Place only"));
        assert_eq!(days[1].activities, vec![FREE_DAY_MESSAGE.to_string()]);
    }

    #[test]
    fn test_entry_format() {
        let pool = vec![scored("abc123", 200, 2, &[Morning])];
        let mut used = HashSet::new();
        let plan = DayScheduler::new().plan_day(&pool, &mut used);
        assert_eq!(
            plan.render(),
            vec![
                "8h da Manhã: <a href='http://maps.google.com/?q=place_id:abc123' target='_blank' rel='noopener noreferrer'>Place abc123</a> (2h, Barato)"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_name_without_id_is_plain_and_escaped() {
        let mut candidate = scored("", 200, 1, &[Evening]);
        candidate.point.name = "Bar <Zé> & Cia".to_string();
        let pool = vec![candidate];
        let mut used = HashSet::new();
        let plan = DayScheduler::new().plan_day(&pool, &mut used);
        assert_eq!(
            plan.render(),
            vec!["19h da Noite: Bar &lt;Zé&gt; &amp; Cia (1h, Barato)".to_string()]
        );
    }
}
