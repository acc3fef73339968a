//! Stocking the pond: turning species definitions into live fish.

use std::sync::Arc;

use rand::Rng;

use super::types::FishInstance;
use crate::core::constants::{DOCK_X, POND_LEFT_X, SPEED_SCALE};
use crate::species::{DepthBand, SpawnX, SpeciesCatalog, SpeciesDefinition, SpeciesId};

/// Roll the size ratio shared by a fish's length and weight.
///
/// Uniform over 0.01..=1.00 in hundredths, so a long fish is also a heavy one.
pub fn roll_size_ratio(rng: &mut impl Rng) -> f64 {
    rng.gen_range(1..=100) as f64 * 0.01
}

/// Pick a random unit direction: -1, 0 or 1.
pub fn roll_unit(rng: &mut impl Rng) -> f64 {
    rng.gen_range(-1..=1) as f64
}

/// Create one fish of `species` in spawn slot `slot`.
pub fn spawn_fish(slot: usize, species: Arc<SpeciesDefinition>, rng: &mut impl Rng) -> FishInstance {
    let ratio = roll_size_ratio(rng);
    let length = species.length.at(ratio);
    let weight = species.weight.at(ratio);

    let (dir, vdir) = if species.movement.is_animate() {
        (roll_unit(rng), roll_unit(rng))
    } else {
        (0.0, 0.0)
    };

    let x = match species.spawn_x {
        SpawnX::Fixed(x) => x,
        SpawnX::Random => rng.gen_range(POND_LEFT_X..DOCK_X),
    };
    let level = rng.gen_range(species.depth.min..=species.depth.max);
    let y = DepthBand::level_y(level);

    FishInstance {
        speed: species.speed * SPEED_SCALE,
        species,
        slot,
        x,
        y,
        alive: true,
        hooked: false,
        move_timer: 0,
        dir,
        vdir,
        length,
        weight,
    }
}

/// Spawn every manifest entry the catalog knows, in manifest order.
///
/// Unknown species ids are skipped. Slots are assigned consecutively to the
/// fish actually spawned.
pub fn stock_pond(
    manifest: &[SpeciesId],
    catalog: &SpeciesCatalog,
    rng: &mut impl Rng,
) -> Vec<FishInstance> {
    let mut fish = Vec::with_capacity(manifest.len());
    for &id in manifest {
        match catalog.shared(id) {
            Some(species) => {
                let slot = fish.len();
                fish.push(spawn_fish(slot, species, rng));
            }
            None => log::debug!("dropping unknown species {id} from pond manifest"),
        }
    }
    fish
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_size_ratio_range() {
        let mut rng = test_rng();
        for _ in 0..1000 {
            let ratio = roll_size_ratio(&mut rng);
            assert!((0.01..=1.0 + 1e-9).contains(&ratio), "ratio {}", ratio);
        }
    }

    #[test]
    fn test_spawned_sizes_within_species_ranges() {
        let catalog = SpeciesCatalog::builtin();
        let mut rng = test_rng();
        for species in catalog.iter() {
            for _ in 0..200 {
                let fish = spawn_fish(0, catalog.shared(species.id).unwrap(), &mut rng);
                assert!(
                    species.length.contains(fish.length),
                    "{} length {} outside range",
                    species.name,
                    fish.length
                );
                assert!(
                    species.weight.contains(fish.weight),
                    "{} weight {} outside range",
                    species.name,
                    fish.weight
                );
            }
        }
    }

    #[test]
    fn test_length_and_weight_correlate() {
        let catalog = SpeciesCatalog::builtin();
        let species = catalog.shared(0).unwrap();
        let mut rng = test_rng();
        let mut fish: Vec<_> = (0..50)
            .map(|i| spawn_fish(i, species.clone(), &mut rng))
            .collect();
        fish.sort_by(|a, b| a.length.total_cmp(&b.length));
        for pair in fish.windows(2) {
            assert!(pair[0].weight <= pair[1].weight + 0.1);
        }
    }

    #[test]
    fn test_spawn_respects_depth_band() {
        let catalog = SpeciesCatalog::builtin();
        let mut rng = test_rng();
        for species in catalog.iter() {
            let fish = spawn_fish(0, catalog.shared(species.id).unwrap(), &mut rng);
            assert!(fish.y <= species.depth.floor_y() + 1e-9);
            assert!(fish.y >= species.depth.surface_y() - 1e-9);
        }
    }

    #[test]
    fn test_fixed_spawn_x() {
        let catalog = SpeciesCatalog::builtin();
        let mut rng = test_rng();
        let rock = spawn_fish(0, catalog.shared(2).unwrap(), &mut rng);
        assert!((rock.x - 200.0).abs() < f64::EPSILON);
        assert!((rock.dir).abs() < f64::EPSILON);
        assert!((rock.vdir).abs() < f64::EPSILON);
    }

    #[test]
    fn test_random_spawn_x_in_pond() {
        let catalog = SpeciesCatalog::builtin();
        let mut rng = test_rng();
        for _ in 0..100 {
            let fish = spawn_fish(0, catalog.shared(1).unwrap(), &mut rng);
            assert!(fish.x >= POND_LEFT_X && fish.x < DOCK_X);
        }
    }

    #[test]
    fn test_speed_is_scaled() {
        let catalog = SpeciesCatalog::builtin();
        let mut rng = test_rng();
        let fish = spawn_fish(0, catalog.shared(1).unwrap(), &mut rng);
        assert!((fish.speed - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_stock_pond_drops_unknown_ids() {
        let catalog = SpeciesCatalog::builtin();
        let mut rng = test_rng();
        let fish = stock_pond(&[0, 42, 1], &catalog, &mut rng);
        assert_eq!(fish.len(), 2);
        assert_eq!(fish[0].slot, 0);
        assert_eq!(fish[1].slot, 1);
        assert_eq!(fish[1].species_id(), 1);
    }
}
