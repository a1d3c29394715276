use super::combination::Combination;

/// Every k-subset of `0..n`, in a fixed deterministic order.
///
/// Rows live back to back in one flat buffer of stride `n`, so a block
/// with millions of entries is a single allocation. Entry `i` is the same
/// subset for every process, which is what lets a worker refer to a board
/// completion by its index alone.
///
/// Order is lexicographic on `selected`: `[0,1,2]`, `[0,1,3]`, ... `[n-3,n-2,n-1]`.
/// When `k == 0` or `k > n` there is exactly one entry with nothing selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combinations {
    n: usize,
    k: usize,
    rows: Vec<u8>,
}

impl Combinations {
    pub fn generate(n: usize, k: usize) -> Self {
        assert!(n <= u8::MAX as usize + 1, "indices must fit in a byte");
        if k == 0 || k > n {
            return Self {
                n,
                k: 0,
                rows: (0..n).map(|i| i as u8).collect(),
            };
        }
        let mut rows = Vec::with_capacity(choose(n, k) * n);
        let limits = (0..k).map(|i| i + n - k).collect::<Vec<_>>();
        let mut current = (0..k).collect::<Vec<_>>();
        loop {
            Self::emit(&mut rows, &current, n);
            match (0..k).rev().find(|&i| current[i] < limits[i]) {
                None => break,
                Some(i) => {
                    current[i] += 1;
                    for j in i + 1..k {
                        current[j] = current[j - 1] + 1;
                    }
                }
            }
        }
        Self { n, k, rows }
    }

    /// selected ++ ascending complement
    fn emit(rows: &mut Vec<u8>, selected: &[usize], n: usize) {
        rows.extend(selected.iter().map(|&i| i as u8));
        let mut next = selected.iter().peekable();
        for i in 0..n {
            match next.peek() {
                Some(&&s) if s == i => {
                    next.next();
                }
                _ => rows.push(i as u8),
            }
        }
    }

    /// Population size the subsets are drawn from.
    pub fn n(&self) -> usize {
        self.n
    }
    /// Length of every `selected` half.
    pub fn k(&self) -> usize {
        self.k
    }
    pub fn len(&self) -> usize {
        match self.n {
            0 => 1,
            n => self.rows.len() / n,
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn get(&self, index: usize) -> Combination<'_> {
        let start = index * self.n;
        Combination::new(&self.rows[start..start + self.n], self.k)
    }
    pub fn iter(&self) -> impl Iterator<Item = Combination<'_>> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }
}

/// C(n, k) without overflow for the sizes a deck can produce.
pub fn choose(n: usize, k: usize) -> usize {
    if k > n {
        0
    } else {
        (0..k.min(n - k)).fold(1, |x, i| x * (n - i) / (i + 1))
    }
}
