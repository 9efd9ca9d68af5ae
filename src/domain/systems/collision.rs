// Hero vs static geometry. Axis-separated: the X pass always runs before the Y
// pass so a wall contact cannot be caught as a landing on the wall's corner.

use crate::domain::geometry::Rect;
use crate::domain::hero::Hero;
use glam::Vec2;

/// Solid floors block from every side.
pub fn resolve_floors(hero: &mut Hero, floors: &[Rect]) {
    resolve_floors_x(hero, floors);
    resolve_floors_y(hero, floors);
}

fn resolve_floors_x(hero: &mut Hero, floors: &[Rect]) {
    let next = Rect::at(
        Vec2::new(hero.position.x + hero.velocity().x, hero.position.y),
        hero.bounds().width,
        hero.bounds().height,
    );

    for floor in floors {
        if !next.intersects(floor) {
            continue;
        }

        let velocity = hero.velocity();
        if velocity.x > 0.0 {
            hero.position.x = (floor.left() - hero.bounds().width) as f32;
        } else if velocity.x < 0.0 {
            hero.position.x = floor.right() as f32;
        }
        hero.set_velocity(Vec2::new(0.0, velocity.y));
    }
}

fn resolve_floors_y(hero: &mut Hero, floors: &[Rect]) {
    let next = Rect::at(
        Vec2::new(hero.position.x, hero.position.y + hero.velocity().y),
        hero.bounds().width,
        hero.bounds().height,
    );

    for floor in floors {
        if !next.intersects(floor) {
            continue;
        }

        let velocity = hero.velocity();
        if velocity.y > 0.0 {
            hero.position.y = (floor.top() - hero.bounds().height) as f32;
            hero.set_grounded(true);
        } else if velocity.y < 0.0 {
            // Head bump.
            hero.position.y = floor.bottom() as f32;
        }
        hero.set_velocity(Vec2::new(velocity.x, 0.0));
    }
}

/// One-way platforms only catch a falling hero whose feet start at or above
/// the platform top. Holding drop skips them entirely.
pub fn resolve_platforms(hero: &mut Hero, platforms: &[Rect]) {
    if hero.is_dropping() || hero.velocity().y <= 0.0 {
        return;
    }

    for platform in platforms {
        let bounds = hero.bounds();
        let next = Rect::at(
            Vec2::new(hero.position.x, hero.position.y + hero.velocity().y),
            bounds.width,
            bounds.height,
        );

        if bounds.bottom() <= platform.top()
            && next.bottom() >= platform.top()
            && next.intersects(platform)
        {
            hero.position.y = (platform.top() - bounds.height) as f32;
            hero.set_velocity(Vec2::new(hero.velocity().x, 0.0));
            hero.set_grounded(true);
        }
    }
}

/// Index of the first marker the hero overlaps, if any.
pub fn touched_level_end(hero: &Hero, level_ends: &[Rect]) -> Option<usize> {
    let bounds = hero.bounds();
    level_ends.iter().position(|end| bounds.intersects(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resources::{SpriteSheets, TextureTable};
    use crate::domain::tuning::HeroTuning;

    fn hero_at(x: f32, y: f32, velocity: Vec2) -> Hero {
        let sheets = SpriteSheets::register(&mut TextureTable::new());
        let mut hero = Hero::new(&sheets, &HeroTuning::default());
        hero.position = Vec2::new(x, y);
        hero.set_velocity(velocity);
        hero
    }

    const FLOOR: Rect = Rect::new(0, 640, 800, 80);

    #[test]
    fn when_falling_into_floor_then_hero_lands_on_top_and_is_grounded() {
        let mut hero = hero_at(100.0, 560.0, Vec2::new(0.0, 5.0));

        resolve_floors(&mut hero, &[FLOOR]);

        assert_eq!(hero.position.y, 560.0);
        assert_eq!(hero.velocity().y, 0.0);
        assert!(hero.is_grounded());
    }

    #[test]
    fn when_any_downward_speed_meets_floor_top_then_landing_zeroes_velocity() {
        for vy in [0.6_f32, 3.0, 7.5, 12.0] {
            let mut hero = hero_at(100.0, 560.5, Vec2::new(0.0, vy));

            resolve_floors(&mut hero, &[FLOOR]);

            assert_eq!(hero.velocity().y, 0.0, "vy {vy}");
            assert!(hero.is_grounded(), "vy {vy}");
            assert_eq!(hero.position.y, 560.0, "vy {vy}");
        }
    }

    #[test]
    fn when_rising_into_ceiling_then_hero_is_pushed_below_it_and_stays_airborne() {
        let ceiling = Rect::new(0, 300, 800, 80);
        let mut hero = hero_at(100.0, 385.0, Vec2::new(0.0, -16.0));

        resolve_floors(&mut hero, &[ceiling]);

        assert_eq!(hero.position.y, 380.0);
        assert_eq!(hero.velocity().y, 0.0);
        assert!(!hero.is_grounded());
    }

    #[test]
    fn when_walking_into_wall_then_x_clamps_to_wall_edge() {
        let wall = Rect::new(400, 400, 80, 240);
        let mut right = hero_at(342.0, 500.0, Vec2::new(4.0, 0.0));
        let mut left = hero_at(482.0, 500.0, Vec2::new(-4.0, 0.0));

        resolve_floors(&mut right, &[wall]);
        resolve_floors(&mut left, &[wall]);

        assert_eq!(right.position.x, 344.0);
        assert_eq!(right.velocity().x, 0.0);
        assert_eq!(left.position.x, 480.0);
        assert_eq!(left.velocity().x, 0.0);
    }

    #[test]
    fn when_landing_on_a_block_corner_then_horizontal_speed_is_kept() {
        // Feet just above the block top: the X pass sees no overlap, the Y pass lands.
        let block = Rect::new(200, 620, 80, 80);
        let mut hero = hero_at(190.0, 539.0, Vec2::new(4.0, 6.0));

        resolve_floors(&mut hero, &[block]);

        assert_eq!(hero.position, Vec2::new(190.0, 540.0));
        assert!(hero.is_grounded());
        assert_eq!(hero.velocity(), Vec2::new(4.0, 0.0));
    }

    #[test]
    fn when_geometry_is_empty_then_nothing_is_resolved() {
        let mut hero = hero_at(100.0, 560.0, Vec2::new(4.0, 5.0));

        resolve_floors(&mut hero, &[]);
        resolve_platforms(&mut hero, &[]);

        assert_eq!(hero.velocity(), Vec2::new(4.0, 5.0));
        assert!(!hero.is_grounded());
    }

    #[test]
    fn when_falling_onto_platform_from_above_then_hero_lands() {
        let platform = Rect::new(0, 400, 300, 60);
        let mut hero = hero_at(100.0, 318.0, Vec2::new(0.0, 5.0));

        resolve_platforms(&mut hero, &[platform]);

        assert_eq!(hero.position.y, 320.0);
        assert_eq!(hero.velocity().y, 0.0);
        assert!(hero.is_grounded());
    }

    #[test]
    fn when_jumping_up_through_platform_then_it_does_not_catch() {
        let platform = Rect::new(0, 400, 300, 60);
        let mut rising = hero_at(100.0, 410.0, Vec2::new(0.0, -10.0));
        // Already overlapping and now falling: feet start below the top.
        let mut inside = hero_at(100.0, 350.0, Vec2::new(0.0, 3.0));

        resolve_platforms(&mut rising, &[platform]);
        resolve_platforms(&mut inside, &[platform]);

        assert!(!rising.is_grounded());
        assert!(!inside.is_grounded());
        assert_eq!(inside.position.y, 350.0);
    }

    #[test]
    fn when_drop_is_held_then_platforms_are_skipped() {
        use crate::domain::input::InputIntent;
        use std::time::Duration;

        let platform = Rect::new(0, 400, 300, 60);
        let mut hero = hero_at(100.0, 318.0, Vec2::ZERO);
        hero.update(
            &InputIntent {
                drop_held: true,
                ..InputIntent::default()
            },
            Duration::from_millis(16),
        );
        hero.set_velocity(Vec2::new(0.0, 5.0));

        resolve_platforms(&mut hero, &[platform]);

        assert!(!hero.is_grounded());
        assert_eq!(hero.position.y, 318.0);
    }

    #[test]
    fn when_hero_overlaps_a_statue_then_its_index_is_reported() {
        let hero = hero_at(100.0, 560.0, Vec2::ZERO);
        let ends = [Rect::new(900, 512, 128, 128), Rect::new(120, 512, 128, 128)];

        assert_eq!(touched_level_end(&hero, &ends), Some(1));
        assert_eq!(touched_level_end(&hero, &ends[..1]), None);
    }
}
