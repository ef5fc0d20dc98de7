//! Static legal citations and recommendation templates.
//!
//! These tables never change at runtime; they are plain consts looked up
//! by letter, alert category, or pathway.

use seia_core::{Pathway, TriggerLetter};

// ── Trigger legal bases ──

pub const LETTER_A: &str = "Art. 11 letra a), Ley 19.300";
pub const LETTER_B: &str = "Art. 11 letra b), Ley 19.300";
pub const LETTER_C: &str = "Art. 11 letra c), Ley 19.300";
pub const LETTER_CD: &str = "Art. 11 letras c) y d), Ley 19.300";
pub const LETTER_D: &str = "Art. 11 letra d), Ley 19.300";
pub const LETTER_F: &str = "Art. 11 letra f), Ley 19.300";

// ── Alert citation tables, one per category ──

pub const PROTECTED_AREA_REGS: &[&str] = &[
    "Art. 11 letra d), Ley 19.300",
    "D.S. 40/2012, Art. 8",
    "Ley 18.362 (SNASPE)",
];

pub const GLACIER_REGS: &[&str] = &["Art. 11 letra b), Ley 19.300", "D.S. 40/2012, Art. 6"];

pub const WATER_BODY_REGS: &[&str] = &[
    "Art. 11 letra b), Ley 19.300",
    "Código de Aguas, Art. 129 bis 1",
];

pub const INDIGENOUS_REGS: &[&str] = &[
    "Art. 11 letras c) y d), Ley 19.300",
    "Convenio 169 OIT, Art. 6",
    "D.S. 66/2013 (reglamento de consulta)",
];

pub const POPULATED_CENTER_REGS: &[&str] =
    &["Art. 11 letra a), Ley 19.300", "D.S. 40/2012, Art. 5"];

pub const HERITAGE_REGS: &[&str] = &[
    "Art. 11 letra f), Ley 19.300",
    "Ley 17.288 (Monumentos Nacionales)",
];

pub const RESETTLEMENT_REGS: &[&str] = &["Art. 11 letra c), Ley 19.300", "D.S. 40/2012, Art. 7"];

pub const WATER_RIGHTS_REGS: &[&str] = &["Código de Aguas, Art. 140", "D.G.A. Resolución 1.000"];

// ── Recommendation templates ──

/// Static per-letter recommendations; the decision engine takes at most
/// two per trigger.
pub fn letter_recommendations(letter: TriggerLetter) -> &'static [&'static str] {
    match letter {
        TriggerLetter::A => &[
            "Prepare a population health-risk baseline for the nearest centers",
            "Model air quality and noise propagation toward nearby population",
        ],
        TriggerLetter::B => &[
            "Commission hydrological and glaciological baselines for affected resources",
            "Design water-management measures protecting the affected bodies",
        ],
        TriggerLetter::C => &[
            "Prepare a resettlement and livelihood-restoration plan with affected households",
        ],
        TriggerLetter::Cd => &[
            "Initiate indigenous consultation under Convenio 169 OIT",
            "Map customary land and water uses of the nearby communities",
        ],
        TriggerLetter::D => &[
            "Engage CONAF early on protected-area management-plan compatibility",
            "Evaluate re-siting the affected works outside protected-area limits",
        ],
        TriggerLetter::E => &["Prepare a landscape and visual-impact assessment"],
        TriggerLetter::F => &[
            "Request a Consejo de Monumentos Nacionales pronouncement on affected heritage",
            "Plan archaeological salvage and monitoring during earthworks",
        ],
    }
}

/// Fixed boilerplate keyed by recommended pathway.
pub fn pathway_recommendations(pathway: Pathway) -> &'static [&'static str] {
    match pathway {
        Pathway::Full => &[
            "Prepare a full EIA with baseline studies for every engaged Art. 11 ground",
            "Open early-stage coordination with the Servicio de Evaluación Ambiental",
            "Budget a citizen-participation process (PAC) from the start of the study",
        ],
        Pathway::Standard => &[
            "Prepare a DIA documenting the absence of Art. 11 effects",
            "Keep the spatial baseline current in case the project layout changes",
        ],
    }
}

pub const UNDERGROUND_RECOMMENDATION: &str =
    "Include a tunnel-stability and subsidence-monitoring plan";

pub const OPEN_PIT_RECOMMENDATION: &str =
    "Include a mine-closure and pit-rehabilitation plan under Ley 20.551";
