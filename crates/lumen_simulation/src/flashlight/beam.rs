//! Ray vs sphere для луча фонаря.

use bevy::prelude::*;

/// Дистанция вдоль луча до сферы (None: промах или дальше max_distance)
///
/// `direction` должен быть нормализован.
pub fn beam_hit_distance(
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let to_center = center - origin;
    let along = to_center.dot(direction);

    // Origin внутри сферы: попадание сразу
    if to_center.length_squared() <= radius * radius {
        return Some(0.0);
    }

    if along < 0.0 {
        return None;
    }

    let closest_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }

    let entry = along - (radius_sq - closest_sq).sqrt();
    if entry > max_distance {
        return None;
    }

    Some(entry.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beam_hits_sphere_ahead() {
        let hit = beam_hit_distance(Vec3::ZERO, Vec3::NEG_Z, 10.0, Vec3::new(0.0, 0.0, -5.0), 1.0);
        let distance = hit.unwrap();
        assert!((distance - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_beam_misses_sphere_behind() {
        let hit = beam_hit_distance(Vec3::ZERO, Vec3::NEG_Z, 10.0, Vec3::new(0.0, 0.0, 5.0), 1.0);
        assert!(hit.is_none());
    }

    #[test]
    fn test_beam_misses_sphere_to_the_side() {
        let hit = beam_hit_distance(Vec3::ZERO, Vec3::NEG_Z, 10.0, Vec3::new(3.0, 0.0, -5.0), 1.0);
        assert!(hit.is_none());
    }

    #[test]
    fn test_beam_respects_max_distance() {
        let hit = beam_hit_distance(Vec3::ZERO, Vec3::NEG_Z, 10.0, Vec3::new(0.0, 0.0, -12.0), 1.0);
        assert!(hit.is_none());
    }
}
