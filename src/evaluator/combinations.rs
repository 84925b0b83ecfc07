/// Iterator over all C(n,5) five-element index combinations of `0..n`,
/// generated in lexicographic order.
///
/// One iterator covers every selector arity: C(5,5) = 1, C(6,5) = 6,
/// C(7,5) = 21. An `n` below five yields nothing.
pub struct Choose5 {
    indices: [usize; 5],
    n: usize,
    remaining: usize,
}

impl Choose5 {
    pub fn new(n: usize) -> Self {
        let remaining = if n < 5 {
            0
        } else {
            n * (n - 1) * (n - 2) * (n - 3) * (n - 4) / 120
        };
        Self { indices: [0, 1, 2, 3, 4], n, remaining }
    }
}

impl Iterator for Choose5 {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let result = self.indices;

        // Bump the last index with headroom, then restart the tail as the
        // run right after it; past the final combination nothing moves and
        // the remaining count ends the iteration.
        let mut i = 4;
        loop {
            if self.indices[i] < self.n - (5 - i) {
                self.indices[i] += 1;
                for j in (i + 1)..5 {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
            if i == 0 {
                break;
            }
            i -= 1;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Choose5 {}
