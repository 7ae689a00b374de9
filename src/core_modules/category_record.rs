// THEORY:
// A `SymbolicRecord` is the physics-analogy text attached to a geometric pattern:
// what the geometry looks like, which field constraint it suggests, the operator and
// governing equation that express it, the named law, where it shows up physically and
// a dimensional sanity check. The shape is shared by two distinct read-only tables:
//
// - the five computed category records in this module, one per classifier branch, and
// - the named preset catalog in `preset_catalog`, which is configuration data.
//
// Both tables are `static` and never mutated. A `CategoryRecord` is what the
// classifier hands back: a pointer into the first table plus the one per-call field,
// a description carrying the measured values.

use std::fmt;

/// Seven fixed symbolic fields describing a field pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SymbolicRecord {
    pub geometry: &'static str,
    pub constraint: &'static str,
    pub operator: &'static str,
    pub physics_law: &'static str,
    pub applications: &'static [&'static str],
    pub equation: &'static str,
    pub verification: &'static str,
}

/// The five field-pattern categories the classifier can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Point-source, Coulomb-like field.
    RadialDivergence,
    /// Wave equation, directional propagation.
    LinearAnisotropic,
    /// Tight-binding, discrete lattice.
    SparseLattice,
    /// Anomalous or fractional diffusion.
    FractalBoundary,
    /// Eigenmode decomposition.
    MultiModalSuperposition,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::RadialDivergence,
        Category::LinearAnisotropic,
        Category::SparseLattice,
        Category::FractalBoundary,
        Category::MultiModalSuperposition,
    ];

    /// The static record for this category.
    pub fn symbolic(self) -> &'static SymbolicRecord {
        match self {
            Category::RadialDivergence => &RADIAL_DIVERGENCE,
            Category::LinearAnisotropic => &LINEAR_ANISOTROPIC,
            Category::SparseLattice => &SPARSE_LATTICE,
            Category::FractalBoundary => &FRACTAL_BOUNDARY,
            Category::MultiModalSuperposition => &MULTI_MODAL_SUPERPOSITION,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::RadialDivergence => "radial divergence",
            Category::LinearAnisotropic => "linear anisotropic",
            Category::SparseLattice => "sparse lattice",
            Category::FractalBoundary => "fractal boundary",
            Category::MultiModalSuperposition => "multi-modal superposition",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The classifier's result for one descriptor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CategoryRecord {
    pub category: Category,
    pub name: &'static str,
    /// Measured aspect ratio, fill ratio and radial symmetry, in prose.
    pub description: String,
    pub symbolic: &'static SymbolicRecord,
}

/// Name given to every computed (non-preset) result.
pub const COMPUTED_NAME: &str = "Custom Geometry";

pub static RADIAL_DIVERGENCE: SymbolicRecord = SymbolicRecord {
    geometry: "Circular symmetry, high radial consistency",
    constraint: "Radial field divergence with central source",
    operator: "∇ · E = ρ/ε₀",
    physics_law: "Coulomb Field / Point Source Divergence",
    applications: &[
        "Electric monopole",
        "gravitational point mass",
        "scalar field source",
    ],
    equation: "∇²Φ = -ρ/ε₀ (Poisson equation)",
    verification: "Dimensional: [∇²Φ] = [ρ]/[ε₀] ✓",
};

pub static LINEAR_ANISOTROPIC: SymbolicRecord = SymbolicRecord {
    geometry: "Linear extension, directional anisotropy",
    constraint: "Unidirectional field propagation",
    operator: "∂²u/∂x² = (1/c²)∂²u/∂t²",
    physics_law: "Wave Equation / Linear Propagation",
    applications: &["Electromagnetic waves", "sound waves", "vibrating strings"],
    equation: "u(x,t) = A sin(kx - ωt)",
    verification: "Dimensional: [k²u] = [ω²u/c²] ✓",
};

pub static SPARSE_LATTICE: SymbolicRecord = SymbolicRecord {
    geometry: "Sparse network topology, discrete nodes",
    constraint: "Discrete lattice with nearest-neighbor coupling",
    operator: "H|ψ⟩ = E|ψ⟩ with tight-binding model",
    physics_law: "Quantum Lattice / Tight-Binding Hamiltonian",
    applications: &[
        "Crystal band structure",
        "quantum dots",
        "molecular orbitals",
    ],
    equation: "E = -2t cos(ka) (1D tight-binding)",
    verification: "Dimensional: [E] = [t] (energy units) ✓",
};

pub static FRACTAL_BOUNDARY: SymbolicRecord = SymbolicRecord {
    geometry: "Self-similar structure, fractal boundary conditions",
    constraint: "Scale-invariant field behavior with fractal dimension",
    operator: "(-∇²)^(α/2) u = f (fractional Laplacian)",
    physics_law: "Fractional Diffusion / Anomalous Transport",
    applications: &[
        "Turbulent mixing",
        "porous media flow",
        "biological membranes",
    ],
    equation: "∂u/∂t = D_α (-∇²)^(α/2) u",
    verification: "Dimensional: [D_α] = [L^α]/[T] ✓",
};

pub static MULTI_MODAL_SUPERPOSITION: SymbolicRecord = SymbolicRecord {
    geometry: "Complex multi-modal structure with mixed symmetries",
    constraint: "Superposition of multiple geometric modes",
    operator: "Φ(x) = Σ_i c_i φ_i(x) with ∇²φ_i = λ_iφ_i",
    physics_law: "Eigenmode Decomposition / Spectral Analysis",
    applications: &[
        "Cavity resonances",
        "structural vibrations",
        "quantum confined states",
    ],
    equation: "λ_i = (nπ/L)² for 1D cavity modes",
    verification: "Dimensional: [λ] = [L⁻²] ✓",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_has_a_distinct_record() {
        let laws: HashSet<&str> = Category::ALL
            .iter()
            .map(|c| c.symbolic().physics_law)
            .collect();
        assert_eq!(laws.len(), Category::ALL.len());
        for category in Category::ALL {
            let record = category.symbolic();
            assert!(!record.applications.is_empty());
            assert!(record.verification.starts_with("Dimensional:"));
        }
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Category::SparseLattice.to_string(), "sparse lattice");
    }
}
