//! Built-in material-class table and the no-match fallback.

use super::Seed;
use crate::category::Category;

pub(super) const MATERIAL_CLASSES: &[Seed] = &[
    Seed {
        key: "Plastic",
        category: Category::Recyclable,
        instructions: "Check the recycling number and rinse clean",
        additional_info: Some("Only plastics #1 (PET) and #2 (HDPE) are widely recyclable"),
        preparation: &[
            "Remove all contents",
            "Rinse thoroughly",
            "Remove labels if possible",
            "Compress to save space",
        ],
        common_mistakes: &[
            "Leaving food residue",
            "Including plastic bags with regular recycling",
            "Not checking the recycling number",
        ],
    },
    Seed {
        key: "Glass",
        category: Category::Recyclable,
        instructions: "Separate by color if required by your local facility",
        additional_info: Some("Window glass and drinking glasses are NOT recyclable"),
        preparation: &[
            "Remove caps and lids",
            "Rinse thoroughly",
            "Remove any non-glass parts",
            "Do not break or crush",
        ],
        common_mistakes: &[
            "Including ceramics or porcelain",
            "Including light bulbs",
            "Including broken window glass",
        ],
    },
    Seed {
        key: "Metal",
        category: Category::Recyclable,
        instructions: "Most metal containers and aluminum items are recyclable",
        additional_info: None,
        preparation: &[
            "Rinse clean",
            "Remove paper labels when possible",
            "Crush if space is needed",
        ],
        common_mistakes: &[
            "Including paint cans with wet paint",
            "Not removing food residue",
            "Including pressurized containers",
        ],
    },
    Seed {
        key: "Paper",
        category: Category::Recyclable,
        instructions: "Keep dry and clean",
        additional_info: Some("Shredded paper should be contained in a paper bag"),
        preparation: &[
            "Remove plastic windows from envelopes",
            "Remove staples and paper clips",
            "Keep dry and uncontaminated",
        ],
        common_mistakes: &[
            "Including greasy or food-stained paper",
            "Including thermal receipt paper",
            "Including paper towels or tissues",
        ],
    },
    Seed {
        key: "Wood",
        category: Category::SpecialDisposal,
        instructions: "Check local guidelines for wood recycling facilities",
        additional_info: Some("Treated wood requires special handling"),
        preparation: &[
            "Remove nails and hardware",
            "Separate treated from untreated wood",
            "Break down into manageable pieces",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Textile",
        category: Category::SpecialDisposal,
        instructions: "Donate if in good condition, or find textile recycling programs",
        additional_info: None,
        preparation: &[
            "Clean and dry before donation",
            "Separate by material type if possible",
            "Check for local textile recycling programs",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Building Material",
        category: Category::SpecialDisposal,
        instructions: "Contact construction waste recycling facilities",
        additional_info: Some("Many materials can be recycled or reused in construction"),
        preparation: &[
            "Sort by material type",
            "Remove hazardous materials",
            "Break down into manageable pieces",
            "Check local construction recycling programs",
        ],
        common_mistakes: &[
            "Mixing different materials",
            "Not checking for asbestos or lead",
            "Improper disposal of hazardous materials",
        ],
    },
];

pub(super) const FALLBACK: Seed = Seed {
    key: "",
    category: Category::Unknown,
    instructions: "Please check local recycling guidelines",
    additional_info: Some("When in doubt, throw it out"),
    preparation: &[
        "Check local recycling guidelines",
        "Contact waste management for specific instructions",
    ],
    common_mistakes: &["Assuming all similar items are recycled the same way"],
};
