//! Built-in reference tables.
//!
//! | Age group | Brackets | Tasks per bracket | Rewards |
//! |-----------|----------|-------------------|---------|
//! | children  | 6        | 3                 | 6       |
//! | teenagers | 6        | 3                 | 6       |
//! | adults    | 6        | 3                 | 6       |
//!
//! Five badges are shared by all groups.

use once_cell::sync::Lazy;

use super::{Badge, Catalog, Reward, Task};

static BUILTIN: Lazy<Catalog> = Lazy::new(build);

impl Catalog {
    /// The default catalog shipped with the service.
    pub fn builtin() -> Catalog {
        BUILTIN.clone()
    }
}

fn t(description: &str, points: u32) -> Task {
    Task::new(description, points)
}

fn r(title: &str, cost: u32, description: &str) -> Reward {
    Reward::new(title, cost, description)
}

fn build() -> Catalog {
    // Indexed [age group][bracket], both in ascending order.
    let tasks = [
        [
            vec![
                t("Create urban wind corridors", 15),
                t("Launch community air monitoring networks", 20),
                t("Plant native trees in parks", 10),
            ],
            vec![
                t("Design eco-friendly toys", 10),
                t("Start a school recycling program", 15),
                t("Paint with natural dyes", 10),
            ],
            vec![
                t("Organize a clean-up walk", 15),
                t("Build a birdhouse", 10),
                t("Learn about air filters", 10),
            ],
            vec![
                t("Create car-free play zones", 20),
                t("Make a compost bin", 15),
                t("Join a tree-planting event", 15),
            ],
            vec![
                t("Promote walking to school", 15),
                t("Create anti-pollution posters", 10),
                t("Participate in a green challenge", 20),
            ],
            vec![
                t("Assist in drone air quality surveys", 25),
                t("Design a pollution mask", 15),
                t("Help monitor local air", 20),
            ],
        ],
        [
            vec![
                t("Develop air cleaning bicycle paths", 20),
                t("Install solar-powered lights", 15),
                t("Organize a bike rally", 15),
            ],
            vec![
                t("Apply eco-friendly paints", 10),
                t("Set up green roofs", 20),
                t("Conduct air quality workshops", 15),
            ],
            vec![
                t("Implement remote work days", 20),
                t("Introduce traffic calming zones", 15),
                t("Launch a carpool initiative", 15),
            ],
            vec![
                t("Deploy mobile air purifiers", 25),
                t("Enforce no-idling zones", 15),
                t("Monitor pollution hotspots", 20),
            ],
            vec![
                t("Use drones for tree planting", 25),
                t("Promote public transit use", 15),
                t("Create air quality apps", 20),
            ],
            vec![
                t("Establish emergency bike lanes", 25),
                t("Lead pollution awareness campaigns", 20),
                t("Coordinate air filter drives", 20),
            ],
        ],
        [
            vec![
                t("Implement photocatalytic coatings", 20),
                t("Install air purifying billboards", 25),
                t("Design green building plans", 20),
            ],
            vec![
                t("Enforce flexible work hours", 15),
                t("Deploy smog-eating cement", 20),
                t("Initiate urban forest projects", 20),
            ],
            vec![
                t("Restrict high-emission vehicles", 20),
                t("Introduce congestion pricing", 15),
                t("Promote telecommuting", 15),
            ],
            vec![
                t("Activate air purification towers", 25),
                t("Expand green wall installations", 20),
                t("Implement traffic rerouting", 15),
            ],
            vec![
                t("Mandate remote work policies", 20),
                t("Apply maximum road tolls", 15),
                t("Deploy emergency air filters", 25),
            ],
            vec![
                t("Launch widespread drone spraying", 30),
                t("Create city-wide no-car zones", 25),
                t("Maximize all purification tech", 30),
            ],
        ],
    ];

    let rewards = [
        vec![
            r("Eco-Friendly Coloring Book", 30, "A coloring book with nature themes."),
            r("Plantable Seed Paper", 50, "Paper that grows into plants."),
            r("Mini Gardening Kit", 75, "A kit to start your own garden."),
            r("Eco-Friendly Backpack", 100, "Sustainable backpack for school."),
            r("Nature Explorer Kit", 150, "Binoculars and a nature journal."),
            r("Reusable Straw Set", 200, "Set of eco-friendly straws."),
        ],
        vec![
            r("Reusable Face Mask", 50, "Sustainable face mask."),
            r("Bamboo Water Bottle", 75, "Eco-friendly water bottle."),
            r("Eco-Friendly Notebook", 100, "Notebook from recycled paper."),
            r("Solar-Powered Phone Charger", 150, "Portable solar charger."),
            r("Sustainable Sneakers", 200, "Sneakers from recycled materials."),
            r("Eco-Friendly T-Shirt", 250, "Organic cotton t-shirt."),
        ],
        vec![
            r("Air Purifying Plant", 50, "Plant that cleans indoor air."),
            r("Smart Air Quality Monitor", 100, "Personal air quality device."),
            r("Eco-Friendly Coffee Maker", 150, "Sustainable coffee maker."),
            r("Solar Charger", 200, "Portable solar charging device."),
            r("Eco-Friendly Home Kit", 300, "Kit with sustainable products."),
            r("Reusable Laptop Sleeve", 350, "Eco-friendly laptop sleeve."),
        ],
    ];

    let badges = vec![
        Badge::new("Green Sprout", 50, "Earned 50 Bloom Points!"),
        Badge::new("Eco Hero", 100, "Earned 100 Bloom Points!"),
        Badge::new("Nature Champion", 200, "Earned 200 Bloom Points!"),
        Badge::new("Air Guardian", 300, "Earned 300 Bloom Points!"),
        Badge::new("Planet Protector", 500, "Earned 500 Bloom Points!"),
    ];

    Catalog::from_parts(tasks, rewards, badges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{AgeGroup, AqiBracket};

    #[test]
    fn builtin_catalog_is_complete() {
        assert!(Catalog::builtin().validate().is_ok());
    }

    #[test]
    fn every_pair_has_three_tasks() {
        let catalog = Catalog::builtin();
        for age_group in AgeGroup::ALL {
            for bracket in AqiBracket::ALL {
                assert_eq!(catalog.tasks_for(age_group, bracket).len(), 3);
            }
        }
    }

    #[test]
    fn every_group_has_six_rewards() {
        let catalog = Catalog::builtin();
        for age_group in AgeGroup::ALL {
            assert_eq!(catalog.rewards_for(age_group).len(), 6);
        }
    }

    #[test]
    fn spot_check_reference_values() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.tasks_for(AgeGroup::Teenagers, AqiBracket::Unhealthy)[0],
            Task::new("Deploy mobile air purifiers", 25)
        );
        assert_eq!(
            catalog
                .find_reward(AgeGroup::Adults, "Reusable Laptop Sleeve")
                .map(|r| r.cost),
            Some(350)
        );
        let names: Vec<&str> = catalog
            .all_badges_ascending()
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Green Sprout",
                "Eco Hero",
                "Nature Champion",
                "Air Guardian",
                "Planet Protector"
            ]
        );
    }
}
