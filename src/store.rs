use chrono::NaiveDateTime;
use dashmap::DashMap;

use crate::types::plan::WeeklyPlan;
use crate::types::run::Run;

/// Persistence the coach relies on. Range and week queries return runs in date order.
pub trait RunStore: Send + Sync {
    fn save(&self, run: Run) -> Run;
    fn get(&self, id: &str) -> Option<Run>;
    fn delete(&self, id: &str) -> Option<Run>;
    fn find_by_user(&self, user_id: &str) -> Vec<Run>;

    fn find_by_user_and_date_range(
        &self,
        user_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Vec<Run> {
        self.find_by_user(user_id)
            .into_iter()
            .filter(|run| run.date >= start && run.date <= end)
            .collect()
    }

    fn find_by_user_year_week(&self, user_id: &str, year: i32, week: u32) -> Vec<Run> {
        self.find_by_user(user_id)
            .into_iter()
            .filter(|run| run.year_number == year && run.week_number == week)
            .collect()
    }

    fn save_plan(&self, plan: WeeklyPlan);
    /// The plan saved for the week starting at `week_start`, if any.
    fn find_plan(&self, user_id: &str, week_start: NaiveDateTime) -> Option<WeeklyPlan>;
    fn remove_plan(&self, user_id: &str, week_start: NaiveDateTime) -> Option<WeeklyPlan>;
}

#[derive(Default)]
pub struct MemoryStore {
    runs: DashMap<String, Run>,
    plans: DashMap<String, WeeklyPlan>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RunStore for MemoryStore {
    fn save(&self, run: Run) -> Run {
        self.runs.insert(run.id.clone(), run.clone());
        run
    }

    fn get(&self, id: &str) -> Option<Run> {
        self.runs.get(id).map(|entry| entry.clone())
    }

    fn delete(&self, id: &str) -> Option<Run> {
        self.runs.remove(id).map(|(_, run)| run)
    }

    fn find_by_user(&self, user_id: &str) -> Vec<Run> {
        let mut runs: Vec<Run> = self
            .runs
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        runs.sort_by_key(|run| run.date);
        runs
    }

    fn save_plan(&self, plan: WeeklyPlan) {
        self.plans.insert(plan.user_id.clone(), plan);
    }

    fn find_plan(&self, user_id: &str, week_start: NaiveDateTime) -> Option<WeeklyPlan> {
        self.plans
            .get(user_id)
            .filter(|plan| plan.week_start == week_start)
            .map(|plan| plan.clone())
    }

    fn remove_plan(&self, user_id: &str, week_start: NaiveDateTime) -> Option<WeeklyPlan> {
        self.plans
            .remove_if(user_id, |_, plan| plan.week_start == week_start)
            .map(|(_, plan)| plan)
    }
}
