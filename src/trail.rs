use sfml::system::Vector2f;

/// Every outer tip position rendered so far, oldest first.
///
/// Nothing is ever evicted, so memory grows with the run time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trail {
    points: Vec<Vector2f>,
}

impl Trail {
    pub fn new() -> Trail {
        Trail::default()
    }

    pub fn append(&mut self, point: Vector2f) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<Vector2f> {
        self.points.last().copied()
    }

    /// Consecutive pairs of points, yields `len - 1` segments.
    pub fn segments(&self) -> impl Iterator<Item = (Vector2f, Vector2f)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(i: usize) -> Vector2f {
        Vector2f::new(i as f32, (i * i) as f32 * 0.5)
    }

    #[test]
    fn empty_and_single() {
        let mut trail = Trail::new();
        assert!(trail.is_empty());
        assert_eq!(trail.segments().count(), 0);

        trail.append(point(1));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.segments().count(), 0);
        assert_eq!(trail.last(), Some(point(1)));
    }

    #[test]
    fn segments_follow_insertion_order() {
        for n in [2, 3, 10, 257] {
            let mut trail = Trail::new();
            for i in 0..n {
                trail.append(point(i));
            }

            assert_eq!(trail.len(), n);
            let segments: Vec<_> = trail.segments().collect();
            assert_eq!(segments.len(), n - 1);
            for (i, (start, end)) in segments.into_iter().enumerate() {
                assert_eq!(start, point(i));
                assert_eq!(end, point(i + 1));
            }
        }
    }

    #[test]
    fn duplicates_are_kept() {
        let mut trail = Trail::new();
        trail.append(point(3));
        trail.append(point(3));
        assert_eq!(trail.len(), 2);
        let segments: Vec<_> = trail.segments().collect();
        assert_eq!(segments, vec![(point(3), point(3))]);
    }
}
