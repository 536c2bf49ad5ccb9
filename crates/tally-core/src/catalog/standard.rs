//! Built-in store checklist.

use crate::entities::ChecklistItem;
use crate::enums::Tier::{self, Operational, ZeroTolerance};

/// `(id, tier, category, title, description, points)`
type Row = (u32, Tier, &'static str, &'static str, &'static str, u32);

#[rustfmt::skip]
const ROWS: &[Row] = &[
    // Zero Tolerance
    (1, ZeroTolerance, "Zero Tolerance", "Unauthorized Items",
        "The presence, use, or sale of any non-approved ingredients, packaging, equipment, or uniforms is strictly prohibited.", 300),
    (2, ZeroTolerance, "Zero Tolerance", "Expired Materials",
        "The storage or use of expired raw materials, packaging, or consumables is strictly prohibited.", 300),
    (3, ZeroTolerance, "Zero Tolerance", "Spoiled Food",
        "Fresh produce, toppings, or drinks showing signs of spoilage, including decay, off-odors, or mold growth, must not be stored or used.", 300),
    (4, ZeroTolerance, "Zero Tolerance", "Overnight Storage",
        "Overnight storage of tea bases, fresh or cut fruits, ice-cream mixes, toppings, finished beverages, or pre-filled cups is strictly prohibited in all store areas.", 300),
    // Dining Area
    (5, Operational, "Dining Area", "Exterior Cleanliness",
        "Storefront signage, door pillars, and outdoor seating must be clean; entrance ground area within 2m free from litter.", 5),
    (6, Operational, "Dining Area", "Exterior Lighting & Audio",
        "All exterior signage and entrance lighting operational; audio within noise limits.", 3),
    (7, Operational, "Dining Area", "Storefront Glass",
        "Storefront glass must be crystal-clear; free from fingerprints, stains, and dust.", 3),
    (8, Operational, "Dining Area", "Indoor Lighting",
        "All interior lighting switched on and clean.", 5),
    (9, Operational, "Dining Area", "Entrance Displays & Promotions",
        "Approved recruitment and promotional materials only; clean and orderly.", 3),
    (10, Operational, "Dining Area", "Air Conditioning",
        "Effective at 24°C ±1°C; vents and units clean.", 3),
    (11, Operational, "Dining Area", "Seating Areas",
        "Indoor and outdoor seating clean and orderly.", 3),
    (12, Operational, "Dining Area", "Interior Décor & Walls",
        "Decorations, partitions, and walls clean; no dust or cobwebs.", 3),
    (13, Operational, "Dining Area", "Plants & Displays",
        "Well-maintained plants; clean, orderly product displays.", 3),
    (14, Operational, "Dining Area", "Ceiling & Fixtures",
        "Ceilings and light fixtures clean; free from stains and cobwebs.", 3),
    (15, Operational, "Dining Area", "Floors & Corners",
        "Floors clean and dry; corners free from dust.", 3),
    (16, Operational, "Dining Area", "Washrooms",
        "Clean, dry, odor-free; no mold or stains.", 3),
    (17, Operational, "Dining Area", "Store Odor Control",
        "Free from abnormal odors; no strong chemicals.", 5),
    // Cashier
    (18, Operational, "Cashier", "Customer Greeting",
        "Customers greeted immediately with approved greeting.", 3),
    (19, Operational, "Cashier", "Product Recommendation",
        "Active recommendation of signature or new products.", 3),
    (20, Operational, "Cashier", "Customer Farewell",
        "Acknowledged verbally upon departure.", 3),
    (21, Operational, "Cashier", "Staffing & Service",
        "Cashier stations continuously staffed; professional delivery.", 3),
    (22, Operational, "Cashier", "Cashier Cleanliness",
        "Counters and screens free from stains/dust.", 5),
    (23, Operational, "Cashier", "Equipment & Cup Holders",
        "Receipt printers, trays, and cup holders clean/stocked.", 3),
    (24, Operational, "Cashier", "Media & Audio Content",
        "Menus/screens display current approved content.", 3),
    (25, Operational, "Cashier", "Cup Sealing Machine",
        "Clean, functional, no sugar residue or mold.", 5),
    // Front Counter
    (26, Operational, "Front Counter", "Thermal Dispensers & Tools",
        "Tea/hot water within expiry; measuring tools clean.", 5),
    (27, Operational, "Front Counter", "Daily Topping Check",
        "Checked daily for freshness/validity.", 5),
    (28, Operational, "Front Counter", "Pre-filled Cups",
        "Stored in freezer; protected from open-air.", 3),
    (29, Operational, "Front Counter", "Ice Bin Management",
        "Clean; ice ≥ 50% capacity; hygienic scoops.", 3),
    (30, Operational, "Front Counter", "Tools & Containers",
        "Stored by category; cleaned immediately after use.", 3),
    (31, Operational, "Front Counter", "Sink & Tap Hygiene",
        "Clean sinks and taps; no residue or mold.", 3),
    (32, Operational, "Front Counter", "Water Heater",
        "Clean internally and externally; no stains.", 3),
    (33, Operational, "Front Counter", "Refrigeration Control",
        "Logged, covered, ≤4°C; no frost accumulation.", 3),
    (34, Operational, "Front Counter", "Ice Cream Quality",
        "Within shelf life; free from spoilage.", 8),
    (35, Operational, "Front Counter", "Ice Cream Machine Hygiene",
        "Machine and area clean; no residue or mold.", 5),
    (36, Operational, "Front Counter", "Cone Storage",
        "Clean bins; dry and free from crumbs/mold.", 3),
    (37, Operational, "Front Counter", "Pest Control",
        "Devices operational; monitoring materials current.", 3),
    (38, Operational, "Front Counter", "Utensils & Stainless Cups",
        "Utensils clean; soaking water replaced every 2hrs.", 5),
    (39, Operational, "Front Counter", "Topping Containers",
        "Sealed, clean, correctly labeled.", 5),
    (40, Operational, "Front Counter", "Post-Preparation Cleaning",
        "Workstations cleaned immediately after use.", 3),
    (41, Operational, "Front Counter", "Hand Hygiene & PPE",
        "Handwashing; gloves and hair nets mandatory.", 5),
    (42, Operational, "Front Counter", "Recipe Accuracy",
        "Mandatory weighing; strictly follow recipes.", 8),
    (43, Operational, "Front Counter", "Pre-Serving Check",
        "Visual inspection; zero foreign matter allowed.", 8),
    (44, Operational, "Front Counter", "Sugar Dispenser Accuracy",
        "Dispense within ±1g of programmed setting.", 3),
    (45, Operational, "Front Counter", "Waste Management (Front)",
        "Covered; emptied at 80% capacity; no overnight waste.", 5),
    // Kitchen
    (46, Operational, "Kitchen", "Food-Contact Utensils",
        "Labeled, stored correctly, and kept clean.", 5),
    (47, Operational, "Kitchen", "Towel Management",
        "Color-coded; disinfected according to procedure.", 5),
    (48, Operational, "Kitchen", "Equipment Placement",
        "Stored in designated, labeled locations.", 3),
    (49, Operational, "Kitchen", "Handwashing Facilities",
        "Soap supplied; stations functional and clean.", 5),
    (50, Operational, "Kitchen", "Back-Area Cleanliness",
        "Surfaces, sinks, and floors orderly.", 3),
    (51, Operational, "Kitchen", "Ice Maker Hygiene",
        "No residue or scale buildup.", 5),
    (52, Operational, "Kitchen", "Opened Materials Control",
        "Sealed, labeled with expiry, stored neatly.", 8),
    (53, Operational, "Kitchen", "Duplicate Opened Materials",
        "Multiple open packages of same material prohibited.", 8),
    (54, Operational, "Kitchen", "Semi-Finished Products",
        "Off-floor storage; expiry clearly recorded.", 5),
    (55, Operational, "Kitchen", "Thermal Dispensers (Back)",
        "Clean; free from residue or mold.", 3),
    (56, Operational, "Kitchen", "Waste Management (Back)",
        "Bin lid covered. Garbage timely disposal, cleaning tools in designated area, no overnight garbage.", 3),
    (57, Operational, "Kitchen", "Back-Area Floors & Walls",
        "Clean, dry, free from cobwebs.", 3),
    (58, Operational, "Kitchen", "Curtains",
        "Clean and free from residue or mold.", 5),
    // Storage Area
    (59, Operational, "Storage Area", "Material Labeling",
        "Location labels; within quantity limits.", 5),
    (60, Operational, "Storage Area", "Storage Conditions",
        "Dry, clean, and odor-free environment.", 3),
    (61, Operational, "Storage Area", "FIFO Management",
        "Stock managed using First-In-First-Out.", 3),
    (62, Operational, "Storage Area", "Floor Contact Prohibited",
        "No food or packaging on floors.", 3),
    (63, Operational, "Storage Area", "6-2-1 Storage Rule",
        "Clearance from floor (15cm), wall (5cm), items.", 3),
    (64, Operational, "Storage Area", "Storage Racks",
        "Clean; personal items separate.", 3),
    (65, Operational, "Storage Area", "Weight-Based Stacking",
        "Light-to-heavy from top to bottom.", 3),
    (66, Operational, "Storage Area", "Fresh Fruit Quality",
        "No browning, mold, or frost damage.", 3),
    (67, Operational, "Storage Area", "Chemical Control",
        "Segregated; no prohibited insecticides/coils.", 3),
    // Operations
    (68, Operational, "Operations", "CCTV Review",
        "Reviews performed for key periods.", 3),
    (69, Operational, "Operations", "CCTV Operation",
        "24/7 operation; coverage of critical areas.", 5),
    (70, Operational, "Operations", "Facility Condition",
        "Maintained well; damages reported promptly.", 3),
    (71, Operational, "Operations", "Cashier Drawer & Tools",
        "Clean, organized, and labeled.", 5),
    (72, Operational, "Operations", "Notice Compliance",
        "Directives implemented correctly.", 3),
    // Staff Hygiene
    (73, Operational, "Staff Hygiene", "Uniform Standards",
        "Company uniforms only; hair covered.", 8),
    (74, Operational, "Staff Hygiene", "Uniform Cleanliness",
        "Clean and free from stains.", 5),
    (75, Operational, "Staff Hygiene", "Personal Hygiene",
        "Good hygiene; no body odor.", 3),
    (76, Operational, "Staff Hygiene", "Access Control",
        "Only attired staff in work areas.", 5),
    (77, Operational, "Staff Hygiene", "Grooming Rules",
        "No jewelry, long nails, polish, or perfume.", 5),
    (78, Operational, "Staff Hygiene", "Service Attitude",
        "Positive, proactive service attitude.", 3),
];

pub(super) fn items() -> Vec<ChecklistItem> {
    ROWS.iter()
        .map(|&(id, tier, category, title, description, points)| ChecklistItem {
            id,
            category: category.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            points,
            tier,
        })
        .collect()
}
