//! Read-only queries over the food catalog

use crate::error::ApiError;
use crate::repositories::FoodRepository;
use fittrack_shared::{FoodItem, GoalCategory, GoalCount};

pub struct FoodService;

impl FoodService {
    /// List the catalog, optionally restricted to the goal named by `goal`
    pub fn list<R>(repo: &R, goal: Option<&str>) -> Result<Vec<FoodItem>, ApiError>
    where
        R: FoodRepository + ?Sized,
    {
        let goal = match goal.map(str::trim).filter(|g| !g.is_empty()) {
            Some(name) => Some(
                name.parse::<GoalCategory>()
                    .map_err(|e| ApiError::Validation(e.to_string()))?,
            ),
            None => None,
        };
        Ok(repo.list_foods(goal))
    }

    pub fn get<R>(repo: &R, id: u32) -> Result<FoodItem, ApiError>
    where
        R: FoodRepository + ?Sized,
    {
        repo.find_food(id)
            .ok_or_else(|| ApiError::NotFound("Food item not found".to_string()))
    }

    /// Item count per category, in category order
    pub fn goal_counts<R>(repo: &R) -> Vec<GoalCount>
    where
        R: FoodRepository + ?Sized,
    {
        let foods = repo.list_foods(None);
        GoalCategory::ALL
            .into_iter()
            .map(|goal| GoalCount {
                goal,
                count: foods.iter().filter(|f| f.goal_type == goal).count(),
            })
            .collect()
    }
}
