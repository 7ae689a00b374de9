// THEORY:
// The preset catalog is configuration data, not computation. Each entry pairs a
// named symbol (sacred-geometry figures and the twelve zodiac constellations) with a
// fixed `SymbolicRecord`. It shares its record shape with the classifier's five
// computed categories but is a separate table: presets are a user-facing selection
// list, computed categories are an algorithmic result.

use crate::core_modules::category_record::SymbolicRecord;

/// A named catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Preset {
    /// Stable lookup key.
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub symbolic: SymbolicRecord,
}

/// Looks a preset up by its key.
pub fn lookup(key: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.key == key)
}

/// All preset keys, in catalog order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|preset| preset.key)
}

pub static PRESETS: [Preset; 18] = [
    Preset {
        key: "seed_of_life",
        name: "Seed of Life",
        description: "7 overlapping circles in hexagonal pattern",
        symbolic: SymbolicRecord {
            geometry: "Radial symmetry, 6-fold rotational symmetry, central convergence point",
            constraint: "Radial divergence from core point",
            operator: "∇ · Φ = ρ",
            physics_law: "Gauss's Law / Field Divergence",
            applications: &[
                "Electric field from point charges",
                "gravitational field mapping",
            ],
            equation: "div(E) = ρ/ε₀",
            verification: "Dimensional: [E]/[L] = [ρ]/[ε₀] ✓",
        },
    },
    Preset {
        key: "flower_of_life",
        name: "Flower of Life",
        description: "19 overlapping circles in hexagonal lattice",
        symbolic: SymbolicRecord {
            geometry: "Multiple interference nodes, periodic lattice structure",
            constraint: "Multiple radial modes in interference pattern",
            operator: "Φ(x,t) = Σₙ ψₙ(x)e^(-iωₙt)",
            physics_law: "Wave Superposition / Harmonic Fields",
            applications: &[
                "Optical interference",
                "acoustic resonance",
                "quantum superposition",
            ],
            equation: "∇²ψₙ = -kₙ²ψₙ",
            verification: "Dimensional: [k²][ψ] = [∇²ψ] ✓",
        },
    },
    Preset {
        key: "torus",
        name: "Torus",
        description: "Donut-shaped surface with circular cross-sections",
        symbolic: SymbolicRecord {
            geometry: "Closed loop topology, azimuthal symmetry, circulation",
            constraint: "Azimuthally looped vector flow",
            operator: "∮ B · dl = μ₀I",
            physics_law: "Ampère's Circuital Law",
            applications: &[
                "Magnetic field around currents",
                "tokamak plasma confinement",
            ],
            equation: "curl(B) = μ₀J",
            verification: "Dimensional: [B]/[L] = [μ₀][J] ✓",
        },
    },
    Preset {
        key: "golden_spiral",
        name: "Golden Spiral",
        description: "Logarithmic spiral with golden ratio growth",
        symbolic: SymbolicRecord {
            geometry: "Self-similar scaling, constant angular growth rate",
            constraint: "Logarithmic radial curve conserving angular growth",
            operator: "r(θ) = ae^(bθ), b = ln(φ)/π",
            physics_law: "Minimum Energy Scaling Path",
            applications: &[
                "Galaxy arms",
                "shell growth",
                "fluid vortices",
                "optimization paths",
            ],
            equation: "dE/dr = minimal for φ-scaling",
            verification: "Dimensional: [r] vs [θ] scaling consistent ✓",
        },
    },
    Preset {
        key: "vesica_piscis",
        name: "Vesica Piscis",
        description: "Intersection of two equal circles",
        symbolic: SymbolicRecord {
            geometry: "Lens-shaped intersection, bilateral symmetry",
            constraint: "Intersection region of circular field fronts",
            operator: "E = ½mv² = ℏω",
            physics_law: "Classical-Quantum Energy Bifurcation",
            applications: &[
                "Wave-particle duality",
                "resonator modes",
                "optical lensing",
            ],
            equation: "λ = h/p (de Broglie relation)",
            verification: "Dimensional: [E] = [ℏ][ω] ✓",
        },
    },
    Preset {
        key: "metatrons_cube",
        name: "Metatron's Cube",
        description: "13-sphere structure containing all 5 Platonic solids",
        symbolic: SymbolicRecord {
            geometry: "3D polyhedral framework, icosahedral symmetry, nested geometric forms",
            constraint: "Discrete crystalline lattice with multiple symmetry groups",
            operator: "H = -ℏ²/2m ∇² + V(r) with crystalline potential",
            physics_law: "Quantum Crystallography / Bloch Wave Theory",
            applications: &[
                "Crystal band structure",
                "electronic states in solids",
                "quasicrystal physics",
            ],
            equation: "ψ(r) = e^(ik·r) u_k(r) (Bloch theorem)",
            verification: "Dimensional: [ψ] = [L^(-3/2)] ✓",
        },
    },
    Preset {
        key: "aries",
        name: "Aries (Ram)",
        description: "V-shaped constellation representing the ram",
        symbolic: SymbolicRecord {
            geometry: "Angular momentum vector, directional thrust pattern",
            constraint: "Rotational kinetic energy with angular acceleration",
            operator: "L = r × p, τ = dL/dt",
            physics_law: "Angular Momentum Conservation / Torque Dynamics",
            applications: &[
                "Gyroscopic motion",
                "planetary rotation",
                "spin angular momentum",
            ],
            equation: "τ = Iα (rotational analog of F = ma)",
            verification: "Dimensional: [τ] = [L²M/T²] ✓",
        },
    },
    Preset {
        key: "taurus",
        name: "Taurus (Bull)",
        description: "V-shaped cluster with prominent bright stars",
        symbolic: SymbolicRecord {
            geometry: "Gravitational binding energy, cluster dynamics",
            constraint: "Stable bound system under mutual gravitational attraction",
            operator: "E = -GM²/2R (virial theorem)",
            physics_law: "Gravitational Binding / Virial Equilibrium",
            applications: &[
                "Star cluster dynamics",
                "galactic structure",
                "dark matter halos",
            ],
            equation: "2K + U = 0 (virial equilibrium)",
            verification: "Dimensional: [E] = [GM²/R] ✓",
        },
    },
    Preset {
        key: "gemini",
        name: "Gemini (Twins)",
        description: "Two parallel bright stars in close proximity",
        symbolic: SymbolicRecord {
            geometry: "Binary system orbital mechanics, coupled oscillators",
            constraint: "Two-body problem with mutual gravitational interaction",
            operator: "μ d²r/dt² = -GMm/r² (reduced mass system)",
            physics_law: "Kepler Laws / Binary Star Dynamics",
            applications: &[
                "Binary star systems",
                "exoplanet detection",
                "tidal forces",
            ],
            equation: "T² = 4π²a³/G(M₁+M₂) (Kepler's third law)",
            verification: "Dimensional: [T²] = [a³/GM] ✓",
        },
    },
    Preset {
        key: "cancer",
        name: "Cancer (Crab)",
        description: "Faint cluster formation with central concentration",
        symbolic: SymbolicRecord {
            geometry: "Spherical symmetry with central density enhancement",
            constraint: "Hydrostatic equilibrium in spherical geometry",
            operator: "dP/dr = -ρ GM(r)/r² (hydrostatic equation)",
            physics_law: "Hydrostatic Equilibrium / Stellar Structure",
            applications: &[
                "Stellar interiors",
                "planetary atmospheres",
                "gas giant structure",
            ],
            equation: "M(r) = 4π ∫₀ʳ ρ(r')r'² dr'",
            verification: "Dimensional: [dP/dr] = [ρ][GM/r²] ✓",
        },
    },
    Preset {
        key: "leo",
        name: "Leo (Lion)",
        description: "Distinctive sickle shape with bright central star",
        symbolic: SymbolicRecord {
            geometry: "Curved trajectory with central force field",
            constraint: "Orbital motion under inverse square law force",
            operator: "F = -GMm/r² r̂ (central force)",
            physics_law: "Central Force Motion / Orbital Mechanics",
            applications: &[
                "Planetary orbits",
                "satellite trajectories",
                "comet paths",
            ],
            equation: "r = a(1-e²)/(1+e cos θ) (orbital equation)",
            verification: "Dimensional: [F] = [GMm/r²] ✓",
        },
    },
    Preset {
        key: "virgo",
        name: "Virgo (Virgin)",
        description: "Large constellation with distributed stellar pattern",
        symbolic: SymbolicRecord {
            geometry: "Statistical mechanics of large N-body system",
            constraint: "Thermodynamic equilibrium in stellar population",
            operator: "S = k ln Ω (entropy of microstate distribution)",
            physics_law: "Statistical Mechanics / Thermodynamic Equilibrium",
            applications: &[
                "Stellar populations",
                "galactic evolution",
                "phase transitions",
            ],
            equation: "dS = (1/T)dU + (P/T)dV - (μ/T)dN",
            verification: "Dimensional: [S] = [k] (entropy units) ✓",
        },
    },
    Preset {
        key: "libra",
        name: "Libra (Scales)",
        description: "Balanced pattern suggesting equilibrium",
        symbolic: SymbolicRecord {
            geometry: "Dynamic equilibrium, force balance symmetry",
            constraint: "Mechanical equilibrium with balanced forces",
            operator: "ΣF = 0, Στ = 0 (equilibrium conditions)",
            physics_law: "Static Equilibrium / Force Balance",
            applications: &[
                "Structural mechanics",
                "lever systems",
                "pressure equilibrium",
            ],
            equation: "F₁d₁ = F₂d₂ (lever principle)",
            verification: "Dimensional: [F][d] = [F][d] ✓",
        },
    },
    Preset {
        key: "scorpius",
        name: "Scorpius (Scorpion)",
        description: "Curved S-shaped stellar arrangement",
        symbolic: SymbolicRecord {
            geometry: "Non-linear dynamics, chaotic trajectory patterns",
            constraint: "Sensitive dependence on initial conditions",
            operator: "dx/dt = f(x,y), dy/dt = g(x,y) (coupled ODEs)",
            physics_law: "Chaos Theory / Non-linear Dynamics",
            applications: &[
                "Weather systems",
                "fluid turbulence",
                "population dynamics",
            ],
            equation: "λ = lim(t→∞) (1/t) ln|δx(t)/δx₀| (Lyapunov exponent)",
            verification: "Dimensional: [λ] = [1/T] ✓",
        },
    },
    Preset {
        key: "sagittarius",
        name: "Sagittarius (Archer)",
        description: "Arrow-like directional pattern toward galactic center",
        symbolic: SymbolicRecord {
            geometry: "Directional vector field, flow toward central attractor",
            constraint: "Radial inflow with central mass concentration",
            operator: "∇·v = -∇²Φ/4πG (continuity + Poisson)",
            physics_law: "Gravitational Flow / Accretion Dynamics",
            applications: &[
                "Black hole accretion",
                "galactic center dynamics",
                "fluid inflow",
            ],
            equation: "dm/dt = 4πρ(r)r²v(r) (mass flow rate)",
            verification: "Dimensional: [dm/dt] = [ρ][r²][v] ✓",
        },
    },
    Preset {
        key: "capricornus",
        name: "Capricornus (Sea Goat)",
        description: "Triangular pattern with hierarchical structure",
        symbolic: SymbolicRecord {
            geometry: "Fractal hierarchy, self-similar scaling structure",
            constraint: "Scale-invariant organization with power-law distribution",
            operator: "P(k) ∝ k^(-γ) (power-law scaling)",
            physics_law: "Scale-Free Networks / Critical Phenomena",
            applications: &["Phase transitions", "percolation", "network topology"],
            equation: "ξ ∝ |T-Tc|^(-ν) (correlation length)",
            verification: "Dimensional: [ξ] = [L] ✓",
        },
    },
    Preset {
        key: "aquarius",
        name: "Aquarius (Water Bearer)",
        description: "Flowing pattern suggesting fluid motion",
        symbolic: SymbolicRecord {
            geometry: "Fluid streamlines, continuous medium flow",
            constraint: "Incompressible fluid with conservation of mass",
            operator: "∇·v = 0, ∂v/∂t + (v·∇)v = -∇P/ρ + ν∇²v",
            physics_law: "Navier-Stokes Equations / Fluid Dynamics",
            applications: &[
                "Atmospheric flow",
                "ocean currents",
                "plasma dynamics",
            ],
            equation: "Re = ρvL/μ (Reynolds number)",
            verification: "Dimensional: [Re] = dimensionless ✓",
        },
    },
    Preset {
        key: "pisces",
        name: "Pisces (Fish)",
        description: "Two connected loops suggesting wave interference",
        symbolic: SymbolicRecord {
            geometry: "Interfering wave patterns, standing wave formation",
            constraint: "Constructive/destructive interference of wave modes",
            operator: "ψ = ψ₁ + ψ₂ = A₁e^(ik₁·r) + A₂e^(ik₂·r)",
            physics_law: "Wave Interference / Superposition Principle",
            applications: &[
                "Double-slit experiment",
                "optical interference",
                "quantum superposition",
            ],
            equation: "I = |ψ|² = |A₁|² + |A₂|² + 2Re(A₁*A₂e^(i(k₁-k₂)·r))",
            verification: "Dimensional: [I] = [|ψ|²] ✓",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let unique: HashSet<&str> = keys().collect();
        assert_eq!(unique.len(), PRESETS.len());
    }

    #[test]
    fn lookup_by_key() {
        let torus = lookup("torus").expect("torus is cataloged");
        assert_eq!(torus.name, "Torus");
        assert_eq!(torus.symbolic.physics_law, "Ampère's Circuital Law");
        assert!(lookup("dodecahedron").is_none());
        assert!(lookup("Torus").is_none());
    }

    #[test]
    fn every_entry_is_complete() {
        for preset in PRESETS.iter() {
            assert!(!preset.name.is_empty(), "{}", preset.key);
            assert!(!preset.description.is_empty(), "{}", preset.key);
            assert!(!preset.symbolic.applications.is_empty(), "{}", preset.key);
            assert!(preset.symbolic.verification.ends_with('✓'), "{}", preset.key);
        }
    }
}
