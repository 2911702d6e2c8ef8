use super::RandomImpl;

const MULTIPLIER: u64 = 0x5DEECE66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// `java.util.Random`: a 48-bit linear congruential generator.
///
/// Every consumer that needs reproducible results must construct its own
/// instance; sharing one makes the output depend on call order.
#[derive(Clone, Debug)]
pub struct LegacyRand {
    seed: u64,
}

impl LegacyRand {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Advances the state and returns its `bits` high bits, `bits <= 32`.
    fn next(&mut self, bits: u64) -> i32 {
        let next = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        self.seed = next;
        (next >> (48 - bits)) as i32
    }
}

impl RandomImpl for LegacyRand {
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_bounded_i32(&mut self, bound: i32) -> i32 {
        if bound & bound.wrapping_sub(1) == 0 {
            (i64::from(bound).wrapping_mul(i64::from(self.next(31))) >> 31) as i32
        } else {
            loop {
                let bits = self.next(31);
                let value = bits % bound;
                // Rejects the incomplete last bucket of the 31 bit range
                if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                    return value;
                }
            }
        }
    }
}
