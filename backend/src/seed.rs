//! Food catalog seeding
//!
//! The catalog is a fixed literal dataset. [`InitGate`] makes sure it is
//! loaded once per process, whether the explicit startup call or the first
//! request gets there first.

use crate::repositories::FoodRepository;
use fittrack_shared::{FoodItem, GoalCategory};
use parking_lot::Mutex;
use tracing::info;

use GoalCategory::{GainMuscle, LoseWeight, StayFit};

/// (goal, name, calories, protein grams, image URL)
#[rustfmt::skip]
const CATALOG: [(GoalCategory, &str, u32, u32, &str); 18] = [
    (LoseWeight, "Grilled Chicken Salad", 280, 35, "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=400"),
    (LoseWeight, "Greek Yogurt with Berries", 150, 15, "https://images.unsplash.com/photo-1488477181946-6428a0291777?w=400"),
    (LoseWeight, "Vegetable Soup", 120, 8, "https://images.unsplash.com/photo-1547592166-23ac45744acd?w=400"),
    (LoseWeight, "Quinoa Bowl", 220, 10, "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=400"),
    (LoseWeight, "Steamed Fish", 180, 30, "https://images.unsplash.com/photo-1519708227418-c8fd9a32b7a2?w=400"),
    (LoseWeight, "Green Smoothie", 140, 6, "https://images.unsplash.com/photo-1610970881699-44a5587cabec?w=400"),
    (GainMuscle, "Chicken Breast & Rice", 550, 50, "https://images.unsplash.com/photo-1604908176997-125f25cc6f3d?w=400"),
    (GainMuscle, "Protein Shake", 320, 40, "https://images.unsplash.com/photo-1622597467836-f3285f2131b8?w=400"),
    (GainMuscle, "Salmon with Sweet Potato", 480, 42, "https://images.unsplash.com/photo-1467003909585-2f8a72700288?w=400"),
    (GainMuscle, "Beef Steak & Vegetables", 520, 45, "https://images.unsplash.com/photo-1546833999-b9f581a1996d?w=400"),
    (GainMuscle, "Eggs & Avocado Toast", 420, 25, "https://images.unsplash.com/photo-1525351484163-7529414344d8?w=400"),
    (GainMuscle, "Tuna & Pasta", 580, 38, "https://images.unsplash.com/photo-1621996346565-e3dbc646d9a9?w=400"),
    (StayFit, "Mixed Fruit Bowl", 180, 4, "https://images.unsplash.com/photo-1511688878353-3a2f5be94cd7?w=400"),
    (StayFit, "Whole Grain Sandwich", 320, 18, "https://images.unsplash.com/photo-1528735602780-2552fd46c7af?w=400"),
    (StayFit, "Oatmeal with Nuts", 280, 12, "https://images.unsplash.com/photo-1517673132405-a56a62b18caf?w=400"),
    (StayFit, "Veggie Wrap", 340, 15, "https://images.unsplash.com/photo-1626700051175-6818013e1d4f?w=400"),
    (StayFit, "Buddha Bowl", 380, 20, "https://images.unsplash.com/photo-1546069901-d5bfd2cbfb1f?w=400"),
    (StayFit, "Poke Bowl", 420, 28, "https://images.unsplash.com/photo-1546069901-d5bfd2cbfb1f?w=400"),
];

/// The seed dataset with IDs assigned 1..=18 in catalog order
pub fn food_catalog() -> Vec<FoodItem> {
    CATALOG
        .iter()
        .zip(1u32..)
        .map(|(&(goal, name, calories, protein, image_url), id)| FoodItem {
            id,
            goal_type: goal,
            name: name.to_string(),
            calories,
            protein,
            image_url: image_url.to_string(),
        })
        .collect()
}

/// Replace the foods collection with the catalog and return its size
pub fn seed_foods<R>(repo: &R) -> usize
where
    R: FoodRepository + ?Sized,
{
    let catalog = food_catalog();
    let count = catalog.len();
    repo.replace_foods(catalog);
    count
}

/// What caused initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitTrigger {
    Startup,
    FirstRequest,
}

/// One-shot guard shared by the startup and first-request paths
///
/// The flag is checked and the catalog seeded while holding one mutex, so
/// two racing first requests seed exactly once.
#[derive(Debug, Default)]
pub struct InitGate {
    initialized: Mutex<bool>,
}

impl InitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed unless already done. Returns `true` if this call seeded.
    pub fn ensure<R>(&self, repo: &R, trigger: InitTrigger) -> bool
    where
        R: FoodRepository + ?Sized,
    {
        let mut initialized = self.initialized.lock();
        if *initialized {
            return false;
        }

        let count = seed_foods(repo);
        *initialized = true;

        match trigger {
            InitTrigger::Startup => info!(count, "Loaded food items into memory"),
            InitTrigger::FirstRequest => info!(count, "In-memory data initialized"),
        }
        true
    }

    pub fn is_initialized(&self) -> bool {
        *self.initialized.lock()
    }

    /// Return to the uninitialized state; the next `ensure` seeds again
    pub fn reset(&self) {
        *self.initialized.lock() = false;
    }
}
