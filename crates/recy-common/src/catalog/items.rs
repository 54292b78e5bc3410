//! Built-in specific-item table.
//!
//! Searched before the material classes. Order is significant: the first key
//! contained in a label wins, so `"Jug"` shadows `"Water Jug"` and `"Bag"`
//! shadows `"Handbag"`. Reordering entries changes classification results.

use super::Seed;
use crate::category::Category;

pub(super) const SPECIFIC_ITEMS: &[Seed] = &[
    Seed {
        key: "Bottle",
        category: Category::Recyclable,
        instructions: "Rinse and place in recycling bin",
        additional_info: None,
        preparation: &[
            "Remove cap",
            "Empty completely",
            "Rinse thoroughly",
            "Crush if plastic",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Plastic Bag",
        category: Category::SpecialDisposal,
        instructions: "Return to grocery store collection points",
        additional_info: Some("Do not place in regular recycling bin"),
        preparation: &[
            "Clean and dry",
            "Remove receipts and debris",
            "Bundle multiple bags together",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Battery",
        category: Category::SpecialDisposal,
        instructions: "Take to designated battery recycling locations",
        additional_info: Some("Different types require different handling"),
        preparation: &[
            "Tape terminal ends of lithium batteries",
            "Keep dry",
            "Sort by battery type if possible",
        ],
        common_mistakes: &[
            "Throwing in regular trash",
            "Not taping battery terminals",
            "Missing battery recycling events",
        ],
    },
    Seed {
        key: "Electronics",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics recycling center",
        additional_info: Some("May contain valuable and hazardous materials"),
        preparation: &[
            "Remove batteries",
            "Delete personal data",
            "Keep all components together",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Coffee Cup",
        category: Category::Landfill,
        instructions: "Most coffee cups are not recyclable due to plastic lining",
        additional_info: Some("Consider using a reusable cup"),
        preparation: &[
            "Remove plastic lid (recycle separately)",
            "Empty all liquids",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Pizza Box",
        category: Category::Compost,
        instructions: "If heavily soiled with grease, compost instead of recycle",
        additional_info: None,
        preparation: &[
            "Remove any non-paper items",
            "Tear into smaller pieces if composting",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Aluminum Foil",
        category: Category::Recyclable,
        instructions: "Clean foil can be recycled",
        additional_info: None,
        preparation: &[
            "Clean off all food residue",
            "Ball up clean foil into fist-sized balls",
            "Check for food contamination",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Light Bulb",
        category: Category::SpecialDisposal,
        instructions: "Different types require different disposal methods",
        additional_info: Some("LED, CFL, and fluorescent bulbs contain hazardous materials"),
        preparation: &[
            "Do not break",
            "Store in original packaging if possible",
            "Take to hardware store recycling programs",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Milk Carton",
        category: Category::Recyclable,
        instructions: "Rinse and flatten",
        additional_info: None,
        preparation: &[
            "Rinse thoroughly",
            "Remove plastic spout if present",
            "Flatten to save space",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Paint Can",
        category: Category::SpecialDisposal,
        instructions: "Take to hazardous waste collection",
        additional_info: None,
        preparation: &[
            "Keep lid sealed",
            "Store upright",
            "Never pour paint down drains",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Styrofoam",
        category: Category::Landfill,
        instructions: "Most facilities do not recycle styrofoam",
        additional_info: Some("Consider alternatives to styrofoam packaging"),
        preparation: &[
            "Break into smaller pieces",
            "Check for local specialty recyclers",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Computer",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics recycling center",
        additional_info: Some("Contains valuable materials and potential hazardous components"),
        preparation: &[
            "Back up important data",
            "Securely wipe personal information",
            "Remove batteries if applicable",
            "Keep all components together",
        ],
        common_mistakes: &[
            "Throwing in regular trash",
            "Not removing personal data",
            "Separating components",
        ],
    },
    Seed {
        key: "Laptop",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics recycling center",
        additional_info: Some("Contains battery and sensitive components"),
        preparation: &[
            "Back up important data",
            "Securely wipe personal information",
            "Remove battery if possible",
            "Include charging cable",
        ],
        common_mistakes: &[
            "Disposing with regular trash",
            "Not removing personal data",
            "Improper battery disposal",
        ],
    },
    Seed {
        key: "Monitor",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics recycling center",
        additional_info: Some("May contain hazardous materials, especially older CRT models"),
        preparation: &[
            "Disconnect all cables",
            "Keep screen intact",
            "Package safely for transport",
        ],
        common_mistakes: &[
            "Breaking the screen",
            "Regular trash disposal",
            "Not checking for local e-waste events",
        ],
    },
    Seed {
        key: "Computer Keyboard",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics recycling center",
        additional_info: Some("Contains electronic components and plastic"),
        preparation: &[
            "Remove batteries if wireless",
            "Clean of debris",
            "Bundle cables neatly",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Computer Hardware",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics recycling center",
        additional_info: Some("May contain valuable metals and sensitive components"),
        preparation: &[
            "Remove any storage devices",
            "Keep components intact",
            "Package safely",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Furniture",
        category: Category::SpecialDisposal,
        instructions: "Check local donation centers or furniture recycling options",
        additional_info: Some("Many items can be donated if in good condition"),
        preparation: &[
            "Clean thoroughly",
            "Disassemble if required",
            "Remove non-furniture attachments",
            "Check for donation eligibility",
        ],
        common_mistakes: &[
            "Leaving at curbside without checking local rules",
            "Not considering donation",
            "Not breaking down large pieces",
        ],
    },
    Seed {
        key: "Table",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or furniture recycling",
        additional_info: Some("Material type affects disposal method"),
        preparation: &[
            "Clean thoroughly",
            "Disassemble if possible",
            "Sort materials (wood, metal, glass)",
            "Check local donation options",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Desk",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or furniture recycling",
        additional_info: Some("Office furniture often has specific recycling programs"),
        preparation: &[
            "Remove all contents",
            "Disassemble if possible",
            "Separate materials by type",
            "Check with office supply stores for recycling programs",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Chair",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or furniture recycling",
        additional_info: Some("Many chairs can be reupholstered or donated"),
        preparation: &[
            "Clean thoroughly",
            "Check structural integrity",
            "Remove any detachable cushions",
            "Contact local donation centers",
        ],
        common_mistakes: &[
            "Leaving at curbside without permission",
            "Not checking donation options",
            "Throwing away repairable items",
        ],
    },
    Seed {
        key: "Bed",
        category: Category::SpecialDisposal,
        instructions: "Contact mattress recycling facilities or furniture disposal services",
        additional_info: Some("Many areas have specific mattress recycling programs"),
        preparation: &[
            "Strip all bedding",
            "Check for bed bug infestation",
            "Disassemble frame if possible",
            "Contact specialty recyclers",
        ],
        common_mistakes: &[
            "Illegal dumping",
            "Not checking local mattress recycling programs",
            "Putting in regular trash",
        ],
    },
    Seed {
        key: "Door",
        category: Category::SpecialDisposal,
        instructions: "Contact construction material recycling centers or salvage yards",
        additional_info: Some("Wooden doors can often be refinished and reused"),
        preparation: &[
            "Remove hardware (handles, hinges)",
            "Separate materials (wood, metal, glass)",
            "Check with architectural salvage companies",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Flooring",
        category: Category::SpecialDisposal,
        instructions: "Material-specific recycling required",
        additional_info: Some("Different types (carpet, wood, vinyl) have different disposal methods"),
        preparation: &[
            "Separate by material type",
            "Remove nails and staples",
            "Cut into manageable pieces",
            "Contact specialty recyclers",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Bag",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or textile recycling",
        additional_info: Some("Many materials can be recycled or reused"),
        preparation: &[
            "Empty all contents",
            "Clean thoroughly",
            "Check condition for donation",
            "Find local textile recycling programs",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Handbag",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or textile/leather recycling",
        additional_info: Some("Quality items can often be resold or donated"),
        preparation: &[
            "Empty all contents",
            "Clean thoroughly",
            "Check condition for donation",
            "Research leather recycling options",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Home Decor",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or material-specific recycling",
        additional_info: Some("Many items can be upcycled or donated"),
        preparation: &[
            "Sort by material type",
            "Clean items thoroughly",
            "Check donation eligibility",
            "Separate recyclable components",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Clothing",
        category: Category::SpecialDisposal,
        instructions: "Donate if in good condition, or use textile recycling programs",
        additional_info: Some("Many retailers offer clothing recycling programs"),
        preparation: &[
            "Clean and dry all items",
            "Sort by condition (donatable vs recyclable)",
            "Check local textile recycling options",
            "Remove non-textile elements",
        ],
        common_mistakes: &[
            "Throwing away reusable clothing",
            "Donating damaged items",
            "Not checking for textile recycling programs",
        ],
    },
    Seed {
        key: "Footwear",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or specialty shoe recycling programs",
        additional_info: Some("Some athletic shoe brands have recycling programs"),
        preparation: &[
            "Clean thoroughly",
            "Tie pairs together",
            "Check condition for donation",
            "Research brand-specific recycling programs",
        ],
        common_mistakes: &[
            "Throwing away repairable shoes",
            "Not checking brand recycling programs",
            "Mixing with regular trash",
        ],
    },
    Seed {
        key: "Shoe",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or specialty shoe recycling programs",
        additional_info: Some("Many shoe materials can be recycled into new products"),
        preparation: &[
            "Clean thoroughly",
            "Keep pairs together",
            "Remove removable insoles",
            "Check local shoe recycling options",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Sneaker",
        category: Category::SpecialDisposal,
        instructions: "Check manufacturer recycling programs",
        additional_info: Some("Many athletic brands have take-back programs"),
        preparation: &[
            "Clean thoroughly",
            "Remove laces and insoles",
            "Check brand-specific recycling programs",
            "Consider donation if in good condition",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Ammunition",
        category: Category::SpecialDisposal,
        instructions: "Contact local law enforcement or licensed disposal facility",
        additional_info: Some("Never dispose of ammunition in regular trash or recycling"),
        preparation: &[
            "Keep in original container if possible",
            "Do not attempt to dismantle",
            "Contact police department for disposal options",
            "Never incinerate",
        ],
        common_mistakes: &[
            "Throwing in regular trash",
            "Attempting to dismantle",
            "Not contacting proper authorities",
        ],
    },
    Seed {
        key: "Weapon",
        category: Category::SpecialDisposal,
        instructions: "Contact local law enforcement for proper disposal",
        additional_info: Some("Weapons require special handling and documentation"),
        preparation: &[
            "Ensure weapon is safe/unloaded",
            "Contact local authorities",
            "Follow legal disposal requirements",
            "Never dispose in regular trash",
        ],
        common_mistakes: &[
            "Illegal disposal",
            "Not contacting authorities",
            "Attempting self-disposal",
        ],
    },
    Seed {
        key: "Glove",
        category: Category::SpecialDisposal,
        instructions: "Dispose based on material type",
        additional_info: Some("Different materials require different disposal methods"),
        preparation: &[
            "Sort by material (leather, textile, rubber)",
            "Clean thoroughly",
            "Check for donation possibilities",
            "Research material-specific recycling",
        ],
        common_mistakes: &[
            "Not separating by material type",
            "Throwing reusable items away",
            "Not checking donation options",
        ],
    },
    Seed {
        key: "Shaker",
        category: Category::Recyclable,
        instructions: "Check material type and rinse thoroughly",
        additional_info: Some("Most protein shakers are made of recyclable plastic"),
        preparation: &[
            "Disassemble all parts",
            "Clean thoroughly",
            "Remove rubber seals",
            "Check plastic recycling number",
        ],
        common_mistakes: &[
            "Not separating components",
            "Leaving residue inside",
            "Recycling with mixing ball inside",
        ],
    },
    Seed {
        key: "Jug",
        category: Category::Recyclable,
        instructions: "Rinse and remove cap before recycling",
        additional_info: Some("Large plastic containers are typically #2 HDPE plastic"),
        preparation: &[
            "Empty completely",
            "Rinse thoroughly",
            "Remove handle if different material",
            "Compress to save space",
        ],
        common_mistakes: &[
            "Leaving liquid inside",
            "Not checking for mold",
            "Recycling with cap attached",
        ],
    },
    Seed {
        key: "Water Jug",
        category: Category::Recyclable,
        instructions: "Clean and recycle with plastic containers",
        additional_info: Some("Large water jugs are usually made of #1 or #2 plastic"),
        preparation: &[
            "Empty completely",
            "Clean and dry",
            "Remove cap and handle if different material",
            "Check local size restrictions",
        ],
        common_mistakes: &[
            "Not emptying completely",
            "Leaving labels on",
            "Including non-recyclable attachments",
        ],
    },
    Seed {
        key: "Cup",
        category: Category::SpecialDisposal,
        instructions: "Disposal depends on material type",
        additional_info: Some("Different materials require different recycling methods"),
        preparation: &[
            "Identify material (plastic, paper, ceramic)",
            "Clean thoroughly",
            "Remove any non-recyclable elements",
            "Sort by material type",
        ],
        common_mistakes: &[
            "Not checking material type",
            "Recycling coated paper cups",
            "Not separating different materials",
        ],
    },
    Seed {
        key: "Pc",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics recycling center",
        additional_info: Some("Contains valuable components and potential hazardous materials"),
        preparation: &[
            "Back up important data",
            "Securely wipe hard drives",
            "Remove batteries if any",
            "Keep components together",
        ],
        common_mistakes: &[
            "Disposing in regular trash",
            "Not removing personal data",
            "Separating valuable components",
        ],
    },
    Seed {
        key: "Screen",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics recycling center",
        additional_info: Some("May contain hazardous materials, handle with care"),
        preparation: &[
            "Keep screen intact",
            "Remove any stands or mounts",
            "Package safely for transport",
            "Take to e-waste facility",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Hardware",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics recycling center",
        additional_info: Some("Contains recyclable metals and components"),
        preparation: &[
            "Sort by type",
            "Remove batteries if present",
            "Keep small parts together",
            "Check manufacturer recycling programs",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "TV",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics recycling center",
        additional_info: Some("Contains hazardous materials, especially older models"),
        preparation: &[
            "Keep screen intact",
            "Remove stand and accessories",
            "Never break or crush",
            "Use certified e-waste recyclers",
        ],
        common_mistakes: &[
            "Putting in regular trash",
            "Breaking the screen",
            "Not using proper e-waste facilities",
        ],
    },
    Seed {
        key: "Mouse",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics recycling center",
        additional_info: Some("Contains electronic components and batteries"),
        preparation: &[
            "Remove batteries if applicable",
            "Coil cord neatly",
            "Keep with other e-waste",
            "Check manufacturer recycling programs",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Food",
        category: Category::Compost,
        instructions: "Dispose in compost bin or food waste collection",
        additional_info: Some("Many communities have food waste programs"),
        preparation: &[
            "Remove packaging",
            "Separate from non-food items",
            "Check local composting guidelines",
            "Use appropriate bins",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Cake",
        category: Category::Compost,
        instructions: "Dispose in food waste or compost",
        additional_info: Some("Food waste should not go in regular trash"),
        preparation: &[
            "Remove non-food decorations",
            "Remove any non-compostable items",
            "Place in food waste bin",
            "Check local composting guidelines",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Cream",
        category: Category::Compost,
        instructions: "Dispose in food waste collection",
        additional_info: Some("Dairy products can be composted in municipal systems"),
        preparation: &[
            "Keep separate from packaging",
            "Use sealed containers for transport",
            "Follow local food waste guidelines",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Dessert",
        category: Category::Compost,
        instructions: "Dispose in food waste or compost",
        additional_info: Some("Separate any non-food components first"),
        preparation: &[
            "Remove packaging",
            "Separate non-food decorations",
            "Use food waste bins",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Figurine",
        category: Category::SpecialDisposal,
        instructions: "Disposal depends on material type",
        additional_info: Some("Consider donation if in good condition"),
        preparation: &[
            "Check material composition",
            "Clean thoroughly",
            "Remove batteries if present",
            "Consider donation options",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Toy",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or material-specific recycling",
        additional_info: Some("Many toys can be donated if in good condition"),
        preparation: &[
            "Remove batteries",
            "Clean thoroughly",
            "Sort by material type",
            "Check donation options",
        ],
        common_mistakes: &[
            "Not removing batteries",
            "Throwing away usable toys",
            "Not checking donation options",
        ],
    },
    Seed {
        key: "Backpack",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or textile recycling",
        additional_info: Some("Many backpacks can be repaired or donated"),
        preparation: &[
            "Empty all contents",
            "Clean thoroughly",
            "Check condition for donation",
            "Research textile recycling options",
        ],
        common_mistakes: &[
            "Throwing away repairable items",
            "Not checking donation options",
            "Disposing with contents inside",
        ],
    },
    Seed {
        key: "Purse",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or textile/leather recycling",
        additional_info: Some("Quality items can often be resold or donated"),
        preparation: &[
            "Empty all contents",
            "Clean thoroughly",
            "Check condition for donation",
            "Research material-specific recycling",
        ],
        common_mistakes: &[
            "Not checking material type",
            "Throwing away valuable items",
            "Not considering resale",
        ],
    },
    Seed {
        key: "Accessories",
        category: Category::SpecialDisposal,
        instructions: "Sort by material type for proper disposal",
        additional_info: Some("Many accessories can be donated or recycled"),
        preparation: &[
            "Sort by material (metal, plastic, textile)",
            "Clean items thoroughly",
            "Remove batteries if present",
            "Check donation options",
        ],
        common_mistakes: &[
            "Not separating by material",
            "Throwing away valuable items",
            "Not checking donation possibilities",
        ],
    },
    Seed {
        key: "Drawer",
        category: Category::SpecialDisposal,
        instructions: "Dispose based on material type (wood, metal, plastic)",
        additional_info: Some("Consider upcycling or repurposing"),
        preparation: &[
            "Remove hardware (handles, rails)",
            "Separate materials",
            "Check for reuse possibilities",
            "Contact furniture recyclers",
        ],
        common_mistakes: &[
            "Not separating materials",
            "Throwing away usable pieces",
            "Not checking local furniture recycling",
        ],
    },
    Seed {
        key: "Poster",
        category: Category::Recyclable,
        instructions: "Recycle with paper products",
        additional_info: Some("Remove any non-paper attachments"),
        preparation: &[
            "Remove tape, staples, or plastic coating",
            "Keep dry and clean",
            "Flatten for recycling",
            "Check for lamination",
        ],
        common_mistakes: &[
            "Recycling laminated posters",
            "Not removing non-paper elements",
            "Recycling when wet or contaminated",
        ],
    },
    Seed {
        key: "Advertisement",
        category: Category::Recyclable,
        instructions: "Recycle with paper materials",
        additional_info: Some("Most printed materials are recyclable"),
        preparation: &[
            "Remove plastic wrapping",
            "Separate from non-paper materials",
            "Keep clean and dry",
            "Bundle with other paper",
        ],
        common_mistakes: &[
            "Including plastic wrapping",
            "Not separating different materials",
            "Recycling glossy ads with regular paper",
        ],
    },
    Seed {
        key: "QR Code",
        category: Category::SpecialDisposal,
        instructions: "Dispose based on material type (paper or electronic display)",
        additional_info: Some("If printed, recycle with paper; if electronic display, follow electronics disposal"),
        preparation: &[
            "Determine material type",
            "Remove from electronic devices if applicable",
            "Sort according to material",
            "Follow appropriate disposal method",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Shelf",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or material-specific recycling",
        additional_info: Some("Can often be repurposed or donated"),
        preparation: &[
            "Remove all contents",
            "Disassemble if possible",
            "Sort by material type",
            "Check donation options",
        ],
        common_mistakes: &[
            "Not separating materials",
            "Throwing away usable items",
            "Not checking donation centers",
        ],
    },
    Seed {
        key: "Bookcase",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or furniture recycling",
        additional_info: Some("Often suitable for donation or upcycling"),
        preparation: &[
            "Remove all contents",
            "Disassemble if possible",
            "Sort materials (wood, metal, glass)",
            "Check local donation options",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Cabinet",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or material-specific recycling",
        additional_info: Some("Kitchen cabinets can often be reused"),
        preparation: &[
            "Remove hardware",
            "Clean thoroughly",
            "Separate materials",
            "Check with renovation recyclers",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Couch",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or furniture recycling",
        additional_info: Some("Many areas have specific upholstered furniture recycling"),
        preparation: &[
            "Clean thoroughly",
            "Remove cushions",
            "Check for reusability",
            "Contact furniture recyclers",
        ],
        common_mistakes: &[
            "Leaving at curb without permission",
            "Not checking donation options",
            "Not removing non-furniture items",
        ],
    },
    Seed {
        key: "Book",
        category: Category::Recyclable,
        instructions: "Donate or recycle with paper products",
        additional_info: Some("Many organizations accept book donations"),
        preparation: &[
            "Remove non-paper elements",
            "Check condition for donation",
            "Separate hardcover from pages if recycling",
            "Research local book drives",
        ],
        common_mistakes: &[
            "Not removing hardcovers",
            "Recycling books that could be donated",
            "Not checking library acceptance",
        ],
    },
    Seed {
        key: "Publication",
        category: Category::Recyclable,
        instructions: "Recycle with paper products",
        additional_info: Some("Most printed materials are recyclable"),
        preparation: &[
            "Remove plastic covers",
            "Remove non-paper inserts",
            "Keep dry and clean",
            "Bundle with other paper",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Disk",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics recycling center",
        additional_info: Some("Contains recyclable materials and potential sensitive data"),
        preparation: &[
            "Securely erase data if possible",
            "Keep in protective case",
            "Do not break or scratch",
            "Check manufacturer recycling programs",
        ],
        common_mistakes: &[
            "Breaking disks for security",
            "Throwing in regular trash",
            "Not protecting from scratches",
        ],
    },
    Seed {
        key: "Electrical Device",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics recycling center",
        additional_info: Some("May contain valuable components and hazardous materials"),
        preparation: &[
            "Remove batteries if applicable",
            "Keep all components together",
            "Package safely",
            "Check manufacturer recycling programs",
        ],
        common_mistakes: &[
            "Disposing in regular trash",
            "Not removing batteries",
            "Separating components",
        ],
    },
    Seed {
        key: "Wiring",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics or metal recycling center",
        additional_info: Some("Copper wiring has valuable recycling potential"),
        preparation: &[
            "Remove from devices if possible",
            "Bundle neatly",
            "Separate by type if known",
            "Check scrap metal recyclers",
        ],
        common_mistakes: &[
            "Throwing in regular trash",
            "Not separating by type",
            "Burning to extract metals",
        ],
    },
    Seed {
        key: "Box",
        category: Category::Recyclable,
        instructions: "Recycle with cardboard/paper materials",
        additional_info: Some("Most boxes are highly recyclable"),
        preparation: &[
            "Break down flat",
            "Remove non-paper materials",
            "Keep dry and clean",
            "Bundle with other cardboard",
        ],
        common_mistakes: &[
            "Not breaking down boxes",
            "Recycling wet or soiled boxes",
            "Including plastic or foam packaging",
        ],
    },
    Seed {
        key: "Appliance",
        category: Category::SpecialDisposal,
        instructions: "Take to appliance recycling center or contact manufacturer",
        additional_info: Some("Many retailers offer appliance recycling with new purchase"),
        preparation: &[
            "Unplug and clean thoroughly",
            "Remove food and contents",
            "Secure doors and loose parts",
            "Check manufacturer take-back programs",
        ],
        common_mistakes: &[
            "Disposing with regular trash",
            "Not removing hazardous components",
            "Not checking retailer recycling options",
        ],
    },
    Seed {
        key: "Device",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics recycling center",
        additional_info: Some("May contain valuable and hazardous materials"),
        preparation: &[
            "Remove batteries",
            "Secure or erase personal data",
            "Keep all components together",
            "Check manufacturer recycling programs",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Refrigerator",
        category: Category::SpecialDisposal,
        instructions: "Contact specialized appliance recycler",
        additional_info: Some("Contains refrigerants that require special handling"),
        preparation: &[
            "Empty completely",
            "Clean thoroughly",
            "Do not remove refrigerant lines",
            "Schedule professional pickup",
        ],
        common_mistakes: &[
            "Attempting DIY refrigerant removal",
            "Disposing with regular trash",
            "Not using certified recyclers",
        ],
    },
    Seed {
        key: "Closet",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or material-specific recycling",
        additional_info: Some("Built-in units may require professional removal"),
        preparation: &[
            "Remove all contents",
            "Disassemble if possible",
            "Sort materials by type",
            "Check donation possibilities",
        ],
        common_mistakes: &[
            "Not separating materials",
            "Improper demolition",
            "Not checking reuse options",
        ],
    },
    Seed {
        key: "Pantry",
        category: Category::SpecialDisposal,
        instructions: "Consider donation or material-specific recycling",
        additional_info: Some("Cabinet units can often be reused"),
        preparation: &[
            "Remove all contents",
            "Clean thoroughly",
            "Disassemble if possible",
            "Sort by material type",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Medicine Chest",
        category: Category::SpecialDisposal,
        instructions: "Separate cabinet from medications",
        additional_info: Some("Medications require separate disposal at pharmacy"),
        preparation: &[
            "Remove all medications",
            "Take medicines to pharmacy",
            "Clean thoroughly",
            "Recycle cabinet by material type",
        ],
        common_mistakes: &[
            "Disposing medications in trash/drain",
            "Not separating materials",
            "Not removing all contents",
        ],
    },
    Seed {
        key: "Floor",
        category: Category::SpecialDisposal,
        instructions: "Contact construction waste recycling facilities",
        additional_info: Some("Different flooring materials require different disposal methods"),
        preparation: &[
            "Identify material type (wood, carpet, tile, vinyl)",
            "Remove nails and tacks",
            "Sort by material type",
            "Check with construction recyclers",
        ],
        common_mistakes: &[
            "Not identifying hazardous materials (asbestos)",
            "Mixing different materials",
            "Not checking local construction recycling options",
        ],
    },
    Seed {
        key: "Animal",
        category: Category::SpecialDisposal,
        instructions: "Contact veterinarian or animal control for proper disposal",
        additional_info: Some("Different animals require different disposal methods"),
        preparation: &[
            "Contact local veterinarian",
            "Check local regulations",
            "Never dispose in regular trash",
            "Consider burial options if permitted",
        ],
        common_mistakes: &[
            "Improper disposal in regular trash",
            "Not checking local regulations",
            "Not contacting proper authorities",
        ],
    },
    Seed {
        key: "Fish",
        category: Category::Compost,
        instructions: "Small fish can be composted or buried in garden",
        additional_info: Some("Large quantities should be disposed through proper channels"),
        preparation: &[
            "Check local regulations",
            "Consider garden burial",
            "Use sealed containers if disposing",
            "Contact pet store for guidance",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Shark",
        category: Category::SpecialDisposal,
        instructions: "Contact wildlife authorities or marine specialists",
        additional_info: Some("Protected species may have specific disposal requirements"),
        preparation: &[
            "Contact marine authorities",
            "Document finding if required",
            "Follow local wildlife regulations",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Sea Life",
        category: Category::SpecialDisposal,
        instructions: "Contact marine authorities or wildlife services",
        additional_info: Some("Different species may have specific disposal requirements"),
        preparation: &[
            "Document the finding",
            "Contact local authorities",
            "Follow marine disposal guidelines",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Aquatic",
        category: Category::SpecialDisposal,
        instructions: "Contact appropriate authorities based on species",
        additional_info: Some("Different aquatic life requires different disposal methods"),
        preparation: &[
            "Identify species if possible",
            "Contact local authorities",
            "Follow proper disposal guidelines",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Water",
        category: Category::SpecialDisposal,
        instructions: "Dispose according to content and contamination level",
        additional_info: Some("Contaminated water requires special handling"),
        preparation: &[
            "Identify any contaminants",
            "Check local water disposal guidelines",
            "Never dump contaminated water in storm drains",
            "Contact authorities if hazardous",
        ],
        common_mistakes: &[
            "Dumping in storm drains",
            "Not checking for contaminants",
            "Improper disposal of chemical-containing water",
        ],
    },
    Seed {
        key: "Goldfish",
        category: Category::SpecialDisposal,
        instructions: "Never release into natural water bodies",
        additional_info: Some("Can be composted or buried in garden"),
        preparation: &[
            "Consider garden burial",
            "Contact pet store for guidance",
            "Never flush or release into waterways",
            "Check local pet disposal guidelines",
        ],
        common_mistakes: &[
            "Releasing into natural water bodies",
            "Flushing down toilet",
            "Not checking local guidelines",
        ],
    },
    Seed {
        key: "Business Card",
        category: Category::Recyclable,
        instructions: "Recycle with paper products",
        additional_info: Some("Remove any plastic coatings or special finishes"),
        preparation: &[
            "Remove any plastic elements",
            "Keep with other paper products",
            "Check for special coatings",
            "Bundle with similar items",
        ],
        common_mistakes: &[
            "Recycling laminated cards",
            "Not checking for special finishes",
            "Mixing with non-paper items",
        ],
    },
    Seed {
        key: "Text",
        category: Category::Recyclable,
        instructions: "Recycle with paper materials",
        additional_info: Some("Printed materials are generally recyclable"),
        preparation: &[
            "Remove any non-paper elements",
            "Keep dry and clean",
            "Bundle with other paper",
        ],
        common_mistakes: &[],
    },
    Seed {
        key: "Cosmetics",
        category: Category::SpecialDisposal,
        instructions: "Separate packaging from contents",
        additional_info: Some("Many cosmetic containers can be recycled after cleaning"),
        preparation: &[
            "Empty all contents",
            "Clean containers thoroughly",
            "Separate different materials",
            "Check brand recycling programs",
        ],
        common_mistakes: &[
            "Not emptying containers",
            "Mixing different materials",
            "Not checking brand take-back programs",
        ],
    },
    Seed {
        key: "Lighter",
        category: Category::SpecialDisposal,
        instructions: "Ensure completely empty before disposal",
        additional_info: Some("Contains flammable materials and requires careful handling"),
        preparation: &[
            "Ensure completely empty",
            "Do not crush or puncture",
            "Check local hazardous waste guidelines",
            "Never throw in regular trash while containing fuel",
        ],
        common_mistakes: &[
            "Disposing with remaining fuel",
            "Throwing in regular trash",
            "Attempting to dismantle",
        ],
    },
    Seed {
        key: "Novel",
        category: Category::Recyclable,
        instructions: "Donate or recycle with paper products",
        additional_info: Some("Consider donating to libraries or book drives first"),
        preparation: &[
            "Remove non-paper covers",
            "Check condition for donation",
            "Separate hardcover from pages if recycling",
            "Research local book donation options",
        ],
        common_mistakes: &[
            "Not removing hardcovers",
            "Recycling books that could be donated",
            "Not checking library acceptance",
        ],
    },
    Seed {
        key: "Ceiling Fan",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics/appliance recycling center",
        additional_info: Some("Contains metal and electrical components that can be recycled"),
        preparation: &[
            "Disconnect from power source",
            "Remove light bulbs and shades",
            "Disassemble if possible",
            "Keep all parts together",
        ],
        common_mistakes: &[
            "Disposing in regular trash",
            "Not removing light bulbs",
            "Improper disassembly",
        ],
    },
    Seed {
        key: "Light Fixture",
        category: Category::SpecialDisposal,
        instructions: "Take to electronics/metal recycling center",
        additional_info: Some("Different materials need to be separated for recycling"),
        preparation: &[
            "Remove all bulbs",
            "Separate materials (metal, glass, plastic)",
            "Remove any wiring",
            "Check local recycling guidelines",
        ],
        common_mistakes: &[
            "Not removing bulbs",
            "Mixing different materials",
            "Improper wiring disposal",
        ],
    },
];
