mod binary;
mod error;
mod euclid;
pub mod policy;
mod recursive;
pub mod validation;

pub use binary::{gcd_binary, gcd_stein};
pub use error::{GcdError, GcdResult};
pub use euclid::{gcd_div, gcd_euclid, gcd_mod, gcd_sub, subtraction_steps};
pub use recursive::{
    ExtendedGcd, gcd_extended, gcd_mod_recursive, gcd_sub_recursive, gcd_sub_recursive_bounded,
};
pub use validation::{
    check_consistency, check_fundamental_properties, reference_gcd, validate, validate_extended,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Algorithm {
    EuclidMod,
    EuclidSub,
    EuclidDiv,
    EuclidModRecursive,
    EuclidSubRecursive,
    EuclidExtended,
    BinaryStein,
}

pub const ALL_ALGORITHMS: [Algorithm; 7] = [
    Algorithm::EuclidMod,
    Algorithm::EuclidSub,
    Algorithm::EuclidDiv,
    Algorithm::EuclidModRecursive,
    Algorithm::EuclidSubRecursive,
    Algorithm::EuclidExtended,
    Algorithm::BinaryStein,
];

pub fn all_algorithms() -> &'static [Algorithm] {
    &ALL_ALGORITHMS
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Family {
    Euclidean,
    Binary,
}

/// Growth of the step count in the operand magnitude.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Complexity {
    Logarithmic,
    Linear,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Self::EuclidMod => "euclid-mod",
            Self::EuclidSub => "euclid-sub",
            Self::EuclidDiv => "euclid-div",
            Self::EuclidModRecursive => "euclid-mod-recursive",
            Self::EuclidSubRecursive => "euclid-sub-recursive",
            Self::EuclidExtended => "euclid-extended",
            Self::BinaryStein => "binary-stein",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::EuclidMod => "Euclidean Modulo",
            Self::EuclidSub => "Euclidean Subtraction",
            Self::EuclidDiv => "Euclidean Division",
            Self::EuclidModRecursive => "Recursive Modulo",
            Self::EuclidSubRecursive => "Recursive Subtraction",
            Self::EuclidExtended => "Extended Euclidean",
            Self::BinaryStein => "Stein Binary",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::EuclidMod => "iterative Euclid using the remainder operator",
            Self::EuclidSub => "iterative Euclid using repeated subtraction",
            Self::EuclidDiv => "iterative Euclid with the remainder derived from integer division",
            Self::EuclidModRecursive => "recursive Euclid using the remainder operator",
            Self::EuclidSubRecursive => "recursive Euclid using repeated subtraction, depth-bounded",
            Self::EuclidExtended => "recursive Euclid that also returns Bezout coefficients",
            Self::BinaryStein => "Stein's algorithm using shifts and subtraction only",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Self::BinaryStein => Family::Binary,
            _ => Family::Euclidean,
        }
    }

    pub fn complexity(self) -> Complexity {
        match self {
            Self::EuclidSub | Self::EuclidSubRecursive => Complexity::Linear,
            _ => Complexity::Logarithmic,
        }
    }

    pub fn is_recursive(self) -> bool {
        matches!(
            self,
            Self::EuclidModRecursive | Self::EuclidSubRecursive | Self::EuclidExtended
        )
    }

    /// `true` for variants that reject `i64::MIN` before running.
    pub fn needs_absolute_values(self) -> bool {
        matches!(
            self,
            Self::EuclidSub | Self::EuclidSubRecursive | Self::BinaryStein
        )
    }

    /// Computes `gcd(a, b)` with this variant. The extended variant drops its
    /// coefficients; use [`gcd_extended`] to keep them.
    /// Whether `gcd(a, b)` finishes within [`LIMITS`]`.max_linear_steps`.
    ///
    /// Always true for logarithmic variants. The linear ones run as many
    /// steps as [`subtraction_steps`] reports.
    pub fn within_limits(self, a: i64, b: i64) -> bool {
        match self.complexity() {
            Complexity::Logarithmic => true,
            // Rejected before any subtraction happens.
            Complexity::Linear if a == i64::MIN || b == i64::MIN => true,
            Complexity::Linear => {
                let cap = LIMITS.max_linear_steps;
                subtraction_steps(a.unsigned_abs(), b.unsigned_abs(), cap) <= cap
            }
        }
    }

    pub fn gcd(self, a: i64, b: i64) -> GcdResult<i64> {
        match self {
            Self::EuclidMod => gcd_mod(a, b),
            Self::EuclidSub => gcd_sub(a, b),
            Self::EuclidDiv => gcd_div(a, b),
            Self::EuclidModRecursive => gcd_mod_recursive(a, b),
            Self::EuclidSubRecursive => gcd_sub_recursive(a, b),
            Self::EuclidExtended => gcd_extended(a, b).map(|r| r.gcd),
            Self::BinaryStein => gcd_binary(a, b),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Limits {
    /// Subtraction steps allowed to the recursive subtraction variant.
    pub max_subtraction_depth: usize,
    /// Subtraction steps above which callers should not run a linear variant.
    pub max_linear_steps: u64,
}

pub const LIMITS: Limits = Limits {
    max_subtraction_depth: 4096,
    max_linear_steps: 1 << 20,
};
