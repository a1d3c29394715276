use crate::Count;
use crate::combinations::Combinations;

/// One opponent's frame in the enumeration.
#[derive(Debug, Clone, Copy)]
pub struct Level<'a> {
    /// Every two-card hand over the cards still unassigned at this depth.
    pub pairs: &'a Combinations,
    /// Hands actually drawn per surviving branch.
    pub samples: usize,
    /// Leaves below one branch that ends here: the product of deeper sample counts.
    pub weight: Count,
}

impl<'a> Level<'a> {
    /// Frames for `opponents` players dealt from `unassigned` cards, each
    /// drawing at most `desired` hands, with their loss weights filled in.
    pub fn stack(
        pairs: impl Fn(usize) -> Result<&'a Combinations, crate::OddsError>,
        unassigned: usize,
        opponents: usize,
        desired: usize,
    ) -> Result<Vec<Self>, crate::OddsError> {
        let mut levels = (0..opponents)
            .map(|v| unassigned.saturating_sub(crate::HOLE_SIZE * v))
            .map(|n| {
                pairs(n).map(|pairs| Self {
                    pairs,
                    samples: pairs.len().min(desired),
                    weight: 1,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut weight = 1;
        for level in levels.iter_mut().rev() {
            level.weight = weight;
            weight *= level.samples as Count;
        }
        Ok(levels)
    }
}
