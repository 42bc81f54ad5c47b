use rand::Rng;

/// One optional block of a structure, relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafOffset {
    pub dx: i32,
    pub dy: i32,
    pub dz: i32,
    pub probability: f64,
}

pub const fn leaf(dx: i32, dy: i32, dz: i32, probability: f64) -> LeafOffset {
    LeafOffset {
        dx,
        dy,
        dz,
        probability,
    }
}

/// Rolls every entry of `table` independently and reports the included positions.
///
/// Exactly one draw is taken per entry, whatever the outcome, so later
/// consumers of the same stream see the same sequence.
pub fn place_offsets<R: Rng>(
    table: &[LeafOffset],
    anchor: (i32, i32, i32),
    rng: &mut R,
    mut emit: impl FnMut(i32, i32, i32),
) -> usize {
    let (ax, ay, az) = anchor;
    let mut placed = 0;
    for offset in table {
        let roll: f64 = rng.random();
        if roll < offset.probability {
            emit(ax + offset.dx, ay + offset.dy, az + offset.dz);
            placed += 1;
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_certain_and_impossible_entries() {
        let table = [leaf(1, 0, 0, 1.0), leaf(0, 1, 0, 0.0), leaf(0, 0, -1, 1.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = Vec::new();
        let placed = place_offsets(&table, (10, 20, 30), &mut rng, |x, y, z| seen.push((x, y, z)));
        assert_eq!(placed, 2);
        assert_eq!(seen, vec![(11, 20, 30), (10, 20, 29)]);
    }

    #[test]
    fn test_one_draw_per_entry() {
        let table = [leaf(0, 0, 0, 0.5); 7];
        let mut a = ChaCha8Rng::seed_from_u64(9);
        let mut b = ChaCha8Rng::seed_from_u64(9);
        place_offsets(&table, (0, 0, 0), &mut a, |_, _, _| {});
        for _ in 0..table.len() {
            let _: f64 = b.random();
        }
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}
