//! Food catalog repository

use crate::store::MemoryStore;
use fittrack_shared::{FoodItem, GoalCategory};

pub trait FoodRepository: Send + Sync {
    /// Catalog items in seed order, optionally restricted to one category
    fn list_foods(&self, goal: Option<GoalCategory>) -> Vec<FoodItem>;

    fn find_food(&self, id: u32) -> Option<FoodItem>;

    /// Replace the whole catalog
    fn replace_foods(&self, items: Vec<FoodItem>);

    fn food_count(&self) -> usize;
}

impl FoodRepository for MemoryStore {
    fn list_foods(&self, goal: Option<GoalCategory>) -> Vec<FoodItem> {
        match goal {
            Some(goal) => self.foods.filter(|item| item.goal_type == goal),
            None => self.foods.all(),
        }
    }

    fn find_food(&self, id: u32) -> Option<FoodItem> {
        self.foods.find(|item| item.id == id)
    }

    fn replace_foods(&self, items: Vec<FoodItem>) {
        self.foods.replace_all(items);
    }

    fn food_count(&self) -> usize {
        self.foods.len()
    }
}
