// THEORY:
// The `classifier` is the decision half of the decoder. It maps a `Descriptor` onto
// one of five field-pattern categories with an ordered rule cascade: the first rule
// whose predicate holds wins, and later rules are only reached when every earlier one
// failed.
//
// The cascade is data, not nested conditionals. `CASCADE` is a fixed, ordered table
// of (category, predicate) pairs, so precedence is visible in one place and can be
// asserted in tests. Its last entry accepts every descriptor, which makes `classify`
// total.
//
// Order matters:
// 1.  Round, compact, evenly spread shapes are the most specific pattern.
// 2.  Strongly elongated shapes come next, whatever their symmetry.
// 3.  Very sparse shapes are caught before the compactness test, since sparse ink
//     also produces low compactness.
// 4.  Loose, asymmetric shapes read as fractal boundaries.
// 5.  Everything else is a superposition of modes.

use crate::core_modules::category_record::{COMPUTED_NAME, Category, CategoryRecord};
use crate::core_modules::descriptor::Descriptor;
use tracing::debug;

/// One row of the cascade.
#[derive(Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub predicate: fn(&Descriptor) -> bool,
}

impl Rule {
    pub fn matches(&self, descriptor: &Descriptor) -> bool {
        (self.predicate)(descriptor)
    }
}

fn is_radial(d: &Descriptor) -> bool {
    d.radial_symmetry > 0.85 && d.aspect_ratio > 0.8 && d.aspect_ratio < 1.2 && d.compactness > 0.3
}

fn is_elongated(d: &Descriptor) -> bool {
    d.aspect_ratio > 2.0 || d.aspect_ratio < 0.5
}

fn is_sparse(d: &Descriptor) -> bool {
    d.fill_ratio < 0.1
}

fn is_fractal(d: &Descriptor) -> bool {
    d.compactness < 0.5 && d.radial_symmetry < 0.7
}

fn always(_: &Descriptor) -> bool {
    true
}

/// The rule cascade, evaluated top to bottom.
pub const CASCADE: [Rule; 5] = [
    Rule {
        category: Category::RadialDivergence,
        predicate: is_radial,
    },
    Rule {
        category: Category::LinearAnisotropic,
        predicate: is_elongated,
    },
    Rule {
        category: Category::SparseLattice,
        predicate: is_sparse,
    },
    Rule {
        category: Category::FractalBoundary,
        predicate: is_fractal,
    },
    Rule {
        category: Category::MultiModalSuperposition,
        predicate: always,
    },
];

/// The first category in `CASCADE` whose predicate accepts `descriptor`.
pub fn categorize(descriptor: &Descriptor) -> Category {
    CASCADE
        .iter()
        .find(|rule| rule.matches(descriptor))
        .map(|rule| rule.category)
        .unwrap_or(Category::MultiModalSuperposition)
}

/// Classifies a descriptor and attaches its measured values to the category record.
pub fn classify(descriptor: &Descriptor) -> CategoryRecord {
    let category = categorize(descriptor);
    debug!(%category, "classified descriptor");
    CategoryRecord {
        category,
        name: COMPUTED_NAME,
        description: descriptor.summary(),
        symbolic: category.symbolic(),
    }
}
