//! The 2025 Cupcake Lab menu.
//!
//! Keywords, descriptions, and price grids mirror the shop's published
//! menus; descriptions double as the copy shown to customers, so edits
//! here change what the assistant says.

use once_cell::sync::Lazy;

use crate::price::PriceNode;
use crate::record::{Category, ProductRecord};

fn n(v: f64) -> PriceNode {
    PriceNode::Amount(v)
}

fn q(s: &str) -> PriceNode {
    PriceNode::Quote(s.to_string())
}

fn g(entries: Vec<(&str, PriceNode)>) -> PriceNode {
    PriceNode::Group(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

fn rec(
    filename: &str,
    keywords: &[&str],
    description: &str,
    category: Category,
    prices: Option<PriceNode>,
) -> ProductRecord {
    ProductRecord {
        filename: filename.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        description: description.to_string(),
        category,
        prices,
    }
}

/// The full catalog, in menu order. Loaded once, immutable afterwards.
pub static CATALOG: Lazy<Vec<ProductRecord>> = Lazy::new(|| {
    vec![
        rec(
            "1-cupcakes.jpeg",
            &[
                "cupcake", "cupcakes", "basic", "simple", "classic", "dessert", "sweet",
                "baking", "cake", "frosting", "treat", "party", "celebration", "menu", "products",
            ],
            "CupcakeLab 2025 cupcake menu with updated regular and mini cupcake prices and flavors.",
            Category::Cupcakes,
            Some(g(vec![
                ("Banana Crumb", g(vec![("regular", n(70.0)), ("mini", n(30.0))])),
                ("Chocolate + buttercream", g(vec![("regular", n(95.0)), ("mini", n(40.0))])),
                ("Red Velvet + buttercream", g(vec![("regular", n(95.0)), ("mini", n(40.0))])),
                ("Butter cake + Lemon curd + BC", g(vec![("regular", n(100.0)), ("mini", n(40.0))])),
                ("Red Velvet + cream cheese", g(vec![("regular", n(110.0)), ("mini", n(45.0))])),
                ("Almond Brownie", g(vec![("regular", n(95.0)), ("mini", n(40.0))])),
                ("Peanut Butter Smores", g(vec![("regular", n(95.0)), ("mini", n(40.0))])),
                ("Lemon Butter + buttercream", g(vec![("regular", n(95.0)), ("mini", n(40.0))])),
                ("Oreo Surprise", g(vec![("regular", n(115.0)), ("mini", n(45.0))])),
                ("Ube + Ube Mascarpone", g(vec![("regular", n(120.0)), ("mini", n(50.0))])),
                ("Carrot + Cream cheese", g(vec![("regular", n(120.0)), ("mini", n(50.0))])),
                ("Green Tea", g(vec![("regular", n(120.0)), ("mini", n(50.0))])),
                ("Strawberry Lava", g(vec![("regular", n(140.0)), ("mini", n(50.0))])),
                ("Tiramisu", g(vec![("regular", n(130.0)), ("mini", n(55.0))])),
                ("Cheesecake", g(vec![("regular", n(120.0)), ("mini", n(55.0))])),
                ("Chocolate Caramel", g(vec![("regular", n(140.0)), ("mini", n(60.0))])),
                ("Oreo Red Velvet", g(vec![("regular", n(120.0)), ("mini", n(60.0))])),
                ("Chocolate Chip", g(vec![("regular", n(140.0)), ("mini", n(60.0))])),
                ("Orange Liqueur", g(vec![("regular", n(130.0)), ("mini", n(60.0))])),
                ("Ferrero", g(vec![("regular", n(140.0)), ("mini", n(60.0))])),
                ("Reese's", g(vec![("regular", n(130.0)), ("mini", n(60.0))])),
                ("Jack Black", g(vec![("regular", n(140.0)), ("mini", n(60.0))])),
            ])),
        ),
        rec(
            "2-custom-cupcakes.jpeg",
            &[
                "cupcake", "custom cupcakes", "buttercream", "tinting", "2d topper",
                "3d topper", "icing sheet", "fondant", "decoration", "treat",
                "celebration", "party", "cake topper", "personalized", "menu", "add-ons",
            ],
            "CupcakeLab 2025 custom cupcake menu featuring buttercream decoration, 2D and 3D toppers, edible icing sheet toppers, and additional options like candles, greeting cards, and individual boxes.",
            Category::Cupcakes,
            Some(g(vec![
                ("buttercream_tinting", n(25.0)),
                ("2d_topper", n(70.0)),
                ("3d_topper", g(vec![("starting_price", n(90.0))])),
                ("edible_icing_sheet_topper", n(60.0)),
                (
                    "additional_options",
                    g(vec![
                        ("cardstock_topper", n(150.0)),
                        ("acrylic_topper", n(350.0)),
                        ("fondant_letters", n(100.0)),
                        ("candle", n(10.0)),
                        ("greeting_card", n(15.0)),
                        ("individual_box_top_window", n(10.0)),
                        ("individual_box_showcase", n(15.0)),
                    ]),
                ),
            ])),
        ),
        rec(
            "3-custom-cupcakes.jpeg",
            &[
                "cupcake", "custom cupcakes", "red velvet", "dessert", "sweet", "baking",
                "cake", "frosting", "menu",
            ],
            r#"CupcakeLab 2025 Custom Cupcakes Menu

• Pull-Apart Letter/Number: Quoted based on design. Choose your cupcake flavor and let us know your desired design!
• Monogram Cupcakes: 5-7 cupcakes in your choice of colors, letter or number, mixed with cake pops and chocolates. Flavors: red velvet, chocolate, or butter. P2,000.00 per letter or number.
  - Price: Cupcake + Design + Php500 pull-apart charge for board base; Php1200 for fondant board.
• Cupcake Bouquet: 12 cupcakes (max 2 flavors), color scheme of your choice, with ribbon and card. Flavors: red velvet, chocolate, or butter. P2,000.00.
• Cupcake Bouquet 3D: 7 cupcakes (1 flavor), color scheme of your choice, boxed with ribbon and card. Flavors: red velvet, chocolate, or butter. P2,000.00.

*Additional charge for flavors outside of the ones listed. Please refer to cupcake charges for options for additional decorations.*"#,
            Category::Cupcakes,
            Some(g(vec![
                ("monogram_cupcakes", n(2000.0)),
                (
                    "pull_apart_letter_number",
                    g(vec![
                        ("base_price", q("quoted based on design")),
                        ("pull_apart_charge", n(500.0)),
                        ("fondant_board_charge", n(1200.0)),
                    ]),
                ),
                ("cupcake_bouquet", n(2000.0)),
                ("cupcake_bouquet_3d", n(2000.0)),
            ])),
        ),
        rec(
            "4-basic-cakes.jpeg",
            &[
                "cake", "cakes", "basic", "simple", "classic", "dessert", "sweet",
                "baking", "birthday", "celebration", "party", "round", "layer",
            ],
            r#"CupcakeLab 2025 Basic Cakes Menu

• Red Velvet Cake: Our best-seller! Ultra moist red velvet cake, cream cheese frosting, topped with white chocolate shavings.
  6" P1,200.00 | 8" P1,600.00 | 10" P2,000.00
• Chocolate Chip Cake: Chocolate chip cake, cookie dough buttercream, topped with chocolate chip cookies.
  6" P1,500.00 | 8" P1,850.00 | 10" P2,350.00
• Chocolate Cake: Our take on the classic chocolate cake. Decadent cake with rich chocolate frosting.
  6" P1,200.00 | 8" P1,600.00 | 10" P2,000.00
• Carrot Cake: Moist carrot cake with cream cheese frosting and walnuts, topped with sugar carrot decorations.
  6" P1,200.00 | 8" P1,600.00 | 10" P2,000.00

*Each basic cake has 2 layers of cake. Delivery rate will depend on location, pickup is free. For cakes, we recommend car pickup/delivery.*"#,
            Category::Cakes,
            Some(g(vec![
                (
                    "Red Velvet Cake",
                    g(vec![("6\"", n(1200.0)), ("8\"", n(1600.0)), ("10\"", n(2000.0))]),
                ),
                (
                    "Chocolate Chip Cake",
                    g(vec![("6\"", n(1500.0)), ("8\"", n(1850.0)), ("10\"", n(2350.0))]),
                ),
                (
                    "Chocolate Cake",
                    g(vec![("6\"", n(1200.0)), ("8\"", n(1600.0)), ("10\"", n(2000.0))]),
                ),
                (
                    "Carrot Cake",
                    g(vec![("6\"", n(1200.0)), ("8\"", n(1600.0)), ("10\"", n(2000.0))]),
                ),
            ])),
        ),
        rec(
            "5-basic-cakes.jpeg",
            &[
                "cake", "cakes", "basic", "ube", "coffee", "bibingka", "bacon", "cheesecake",
                "dessert", "sweet", "baking", "birthday", "celebration", "party", "round", "layer",
            ],
            r#"CupcakeLab 2025 Basic Cakes Menu

• Ube Halaya: Moist yet fluffy ube cake, filled with swiss buttercream and ube halaya, frosted with ube swiss buttercream and ube cake crumbs.
  6" P1,200.00 | 8" P1,600.00 | 10" P2,000.00
• Dark Roast Coffee: Moist coffee cake made from coffee extract house-made from Sagada beans, covered in a smooth Mexican frosting.
  6" P1,500.00 | 8" P1,850.00 | 10" P2,350.00
• Bibingka Cheesecake: Fluffy and creamy cheesecake, with a graham crust, topped with duck egg / pulang itlog.
  6" P1,200.00
• Bacon Butter: Brown sugar pound cake, studded with fried country bacon, frosted with swiss buttercream and cheddar cheese.
  6" P1,200.00 | 8" P1,600.00 | 10" P2,000.00

*Each basic cake has 2 layers of cake. Delivery rate will depend on location, pickup is free. For cakes, we recommend car pickup/delivery.*"#,
            Category::Cakes,
            Some(g(vec![
                (
                    "Ube Halaya",
                    g(vec![("6\"", n(1200.0)), ("8\"", n(1600.0)), ("10\"", n(2000.0))]),
                ),
                (
                    "Dark Roast Coffee",
                    g(vec![("6\"", n(1500.0)), ("8\"", n(1850.0)), ("10\"", n(2350.0))]),
                ),
                ("Bibingka Cheesecake", g(vec![("6\"", n(1200.0))])),
                (
                    "Bacon Butter",
                    g(vec![("6\"", n(1200.0)), ("8\"", n(1600.0)), ("10\"", n(2000.0))]),
                ),
            ])),
        ),
        rec(
            "6-basic-cakes.jpeg",
            &[
                "cake", "cakes", "basic", "chocolate bacon", "mini cake sampler", "sento cakes",
                "individual packaging", "dessert", "sweet", "baking", "birthday", "celebration",
                "party", "round", "layer", "2025 menu",
            ],
            r#"CupcakeLab 2025 Basic Cakes Menu

• Chocolate Bacon: Brown sugar pound cake, studded with fried country bacon, frosted with soft and silky chocolate frosting.
  6" P1,200.00 | 8" P1,600.00 | 10" P2,000.00
• Mini Cake Sampler: Four inch cakes of our best-selling flavors, Red Velvet, Carrot, Chocolate and Chocolate Chip.
  P2,000.00
• Sento Cakes (Individual Packaging):
  Lemon Butter P500 | Ube Halaya P600 | Red Velvet P550 | Dark Roast Coffee P500 | Chocolate Yema P500 | Matcha P600 | Carrot P600 | Butter Bacon P600 | Chocolate Chip P600 | Chocolate Bacon P600

*Delivery rate will depend on location, pickup is free. For cakes, we recommend car pickup/delivery.*"#,
            Category::Cakes,
            Some(g(vec![
                (
                    "Chocolate Bacon",
                    g(vec![("6\"", n(1200.0)), ("8\"", n(1600.0)), ("10\"", n(2000.0))]),
                ),
                ("Mini Cake Sampler", n(2000.0)),
                (
                    "Sento Cakes",
                    g(vec![
                        ("Lemon Butter", n(500.0)),
                        ("Ube Halaya", n(600.0)),
                        ("Red Velvet", n(550.0)),
                        ("Dark Roast Coffee", n(500.0)),
                        ("Chocolate Yema", n(500.0)),
                        ("Matcha", n(600.0)),
                        ("Carrot", n(600.0)),
                        ("Butter Bacon", n(600.0)),
                        ("Chocolate Chip", n(600.0)),
                        ("Chocolate Bacon", n(600.0)),
                    ]),
                ),
            ])),
        ),
        rec(
            "7-cake-tins.jpeg",
            &[
                "cake", "cake tins", "tiramisu", "red velvet", "chocolate chip",
                "matcha", "ube", "dark roast", "butter bacon", "chocolate bacon",
                "brownie", "party cake", "sharing size", "solo size",
                "cupcake lab", "menu", "2025", "dessert", "car pickup",
            ],
            "CupcakeLab 2025 Cake Tins Menu featuring a variety of flavors in Solo (300ml), Sharing (1000ml), and Party (3000ml) sizes with pricing and delivery information.",
            Category::CakeTins,
            Some(g(vec![
                ("Tiramisu", g(vec![("solo", n(350.0)), ("sharing", n(750.0)), ("party", n(2500.0))])),
                ("Lemon Butter", g(vec![("solo", n(300.0)), ("sharing", n(700.0)), ("party", n(2500.0))])),
                ("Red Velvet", g(vec![("solo", n(300.0)), ("sharing", n(700.0)), ("party", n(2500.0))])),
                ("Chocolate Chip", g(vec![("solo", n(500.0)), ("sharing", n(1000.0)), ("party", n(4000.0))])),
                ("Chocolate Caramel", g(vec![("solo", n(300.0)), ("sharing", n(700.0)), ("party", n(2500.0))])),
                ("Carrot", g(vec![("solo", n(350.0)), ("sharing", n(750.0)), ("party", n(3000.0))])),
                ("Matcha", g(vec![("solo", n(350.0)), ("sharing", n(750.0)), ("party", n(3000.0))])),
                ("Ube Halaya", g(vec![("solo", n(350.0)), ("sharing", n(750.0)), ("party", n(3000.0))])),
                ("Dark Roast Coffee", g(vec![("solo", n(350.0)), ("sharing", n(750.0)), ("party", n(2500.0))])),
                ("Butter Bacon", g(vec![("solo", n(450.0)), ("sharing", n(1000.0)), ("party", n(4000.0))])),
                ("Chocolate Bacon", g(vec![("solo", n(450.0)), ("sharing", n(1000.0)), ("party", n(4000.0))])),
                ("The Brownie", g(vec![("solo", n(500.0)), ("sharing", n(1000.0)), ("party", n(4000.0))])),
            ])),
        ),
        rec(
            "8-custom-cakes-3.jpeg",
            &[
                "cake", "cakes", "custom", "special", "decorated", "design", "wedding",
                "birthday", "celebration", "anniversary", "party", "elegant", "beautiful",
                "fondant", "ganache", "buttercream", "dummy", "styro", "3d character",
                "gravity-defying", "flavor options",
            ],
            r#"CupcakeLab 2025 Custom Cakes Menu

Fondant/Ganache (per layer):
• 6": P9,000.00
• 8": P10,000.00
• 9": P11,500.00
• 10": P12,500.00
• 12": P14,000.00
• 14": P15,500.00

Buttercream (per layer):
• 8": P9,000.00
• 10": P10,000.00
• 12": P11,500.00
• 14": P11,500.00

Dummy/Styro Layer (per layer):
• 6": P5,000.00
• 8": P6,000.00
• 10": P7,000.00
• 12": P8,000.00
• 14": P9,500.00

Additional 3D Character: P500.00
Convert to 3-Dimensional: ×1.3 of the layer rate
Convert to gravity-defying: ×1.3 of the layer rate

Flavor options: Red Velvet, Chocolate Caramel, Chocolate Chip, Lemon Butter, Butter, Choco Yema, Ube, Dark Roast Coffee

*Each layer comes with 1 piece 3D character.*"#,
            Category::Cakes,
            Some(g(vec![
                (
                    "fondant_ganache",
                    g(vec![
                        ("6\"", n(9000.0)),
                        ("8\"", n(10000.0)),
                        ("9\"", n(11500.0)),
                        ("10\"", n(12500.0)),
                        ("12\"", n(14000.0)),
                        ("14\"", n(15500.0)),
                    ]),
                ),
                (
                    "buttercream",
                    g(vec![
                        ("8\"", n(9000.0)),
                        ("10\"", n(10000.0)),
                        ("12\"", n(11500.0)),
                        ("14\"", n(11500.0)),
                    ]),
                ),
                (
                    "dummy_styro",
                    g(vec![
                        ("6\"", n(5000.0)),
                        ("8\"", n(6000.0)),
                        ("10\"", n(7000.0)),
                        ("12\"", n(8000.0)),
                        ("14\"", n(9500.0)),
                    ]),
                ),
                ("additional_3d_character", n(500.0)),
                ("convert_3d", q("×1.3 of the layer rate")),
                ("convert_gravity_defying", q("×1.3 of the layer rate")),
            ])),
        ),
        rec(
            "11-custom-cakes-2.jpeg",
            &[
                "cake", "cakes", "custom", "special", "decorated", "design", "wedding",
                "birthday", "celebration", "anniversary", "party", "elegant", "beautiful",
                "bento", "dessert box", "cake bouquet", "2d topper", "pinata", "sugar cookies",
                "cakesicle", "marshmallows", "meringue", "heart-shaped", "bouquet",
                "buttercream", "2025 menu",
            ],
            r#"CupcakeLab 2025 Custom Cakes & Party Sets

• Bento Party: A custom decorated set of 4" bento cake + 8 cupcakes. Choose 1 flavor for the bento and another for the cupcakes! Design includes 4 2D toppers. Flavors: red velvet, chocolate, carrot, and chocolate chip.
  P2,000.00
• Dessert Box: Heart-shaped pinata with a heart-shaped cake inside, 4 sugar cookies, 2 chocolate covered Oreos, and one cakesicle, surrounded with marshmallows, sprinkles, and meringue! Cake flavors: red velvet, chocolate, carrot, and chocolate chip.
  P3,000.00
• Cake Bouquet: Buttercream cake, wrapped and packaged like a bouquet. Flavors: Chocolate, Red Velvet, Chocolate Chip, or Carrot.
  6" round: P3,500.00 | 8" round: P4,500.00

*Additional charge for flavors outside of the ones listed. Please refer to cupcake charges for options for additional decorations.*"#,
            Category::Cakes,
            Some(g(vec![
                ("bento_party", n(2000.0)),
                ("dessert_box", n(3000.0)),
                (
                    "cake_bouquet",
                    g(vec![("6\" round", n(3500.0)), ("8\" round", n(4500.0))]),
                ),
            ])),
        ),
        rec(
            "12-custom-cakes.jpeg",
            &[
                "cake", "cakes", "custom", "customizable", "bento", "pinata", "number cake",
                "letter cake", "jumbo cupcake", "special", "decorated", "design", "wedding",
                "birthday", "celebration", "anniversary", "party", "elegant", "beautiful",
                "2025 menu",
            ],
            r#"CupcakeLab 2025 Customizable Cakes Menu

• Bento Cakes: Adorable mini cakes with designs that are customizable to fit any theme. Flavors: chocolate, chocolate chip, red velvet, and butter. Individually packed (1pc cake): P500.00 | Box of 4 bento cakes: P3,000.00
• Pinata Cake: A unique dessert that comes with a wooden mallet for you to smash the cake and find goodies and treats inside! P2,300.00
• Number/Letter Cake: A whole cake sliced to form your desired number or letter, perfect for birthdays or anniversaries! Buttercream: P5,000.00 | Fondant: P6,500.00
• 6" Jumbo Cupcake: Christmas decorated 6" cupcake-shaped cake. Flavors: Chocolate, Red Velvet, Carrot & Butter. 6": P2,500.00

*Additional charge for flavors outside of the ones listed. Please refer to cupcake charges for options for additional decorations.*"#,
            Category::Cakes,
            Some(g(vec![
                (
                    "bento_cake",
                    g(vec![("individual", n(500.0)), ("box_of_4", n(3000.0))]),
                ),
                ("pinata_cake", n(2300.0)),
                (
                    "number_letter_cake",
                    g(vec![("buttercream", n(5000.0)), ("fondant", n(6500.0))]),
                ),
                ("jumbo_cupcake_6in", n(2500.0)),
            ])),
        ),
        rec(
            "13-other-desserts.jpeg",
            &[
                "dessert", "desserts", "treats", "sweets", "pastry", "specialty", "variety",
                "menu", "options", "delicious", "sugar cookies", "cake pops", "cakesicle",
                "baked donuts", "brownies", "cookies", "2025 menu",
            ],
            r#"CupcakeLab 2025 Other Desserts Menu

• Sugar Cookies: Decorated to match your event theme. Minimum: 12pcs. Price subject to design.
  2"x2": P60.00 each | 3"x3": P80.00 each | 4"x4": P100.00 each
• Cake Pops: Round cake pops covered in chocolate, themed. Flavors: red velvet or chocolate. Minimum: 12pcs.
  Color & Sprinkles: P75.00 each | 3D Character: P100.00 each | Cupcake Bouquet of 6: P700.00
• Cakesicles: Popsicle-shaped cake pops, themed. Flavors: red velvet or chocolate. Minimum: 12pcs.
  Color & Sprinkles: P120.00 each | 3D Character: P140.00 each
• Baked Donuts: With chocolate or maple glaze, themed. Minimum: 12pcs.
  Color & Sprinkles: P70.00 each | 2D Design: P90.00 each | 3D Design: P120.00 each
• Other Desserts:
  Fudge Brownies 2x2: P40.00 each, min 12pcs
  Chocolate Dipped Brownies: P50.00 each, min 12pcs
  Double Chocolate Oatmeal Cookies: P35.00 each, min 6pcs"#,
            Category::General,
            Some(g(vec![
                (
                    "sugar_cookies",
                    g(vec![
                        ("2x2", n(60.0)),
                        ("3x3", n(80.0)),
                        ("4x4", n(100.0)),
                        ("minimum", n(12.0)),
                        ("note", q("Price subject to design")),
                    ]),
                ),
                (
                    "cake_pops",
                    g(vec![
                        ("color_sprinkles", n(75.0)),
                        ("character_3d", n(100.0)),
                        ("bouquet_6", n(700.0)),
                        ("minimum", n(12.0)),
                    ]),
                ),
                (
                    "cakesicles",
                    g(vec![
                        ("color_sprinkles", n(120.0)),
                        ("character_3d", n(140.0)),
                        ("minimum", n(12.0)),
                    ]),
                ),
                (
                    "baked_donuts",
                    g(vec![
                        ("color_sprinkles", n(70.0)),
                        ("design_2d", n(90.0)),
                        ("design_3d", n(120.0)),
                        ("minimum", n(12.0)),
                    ]),
                ),
                ("fudge_brownies_2x2", g(vec![("price", n(40.0)), ("minimum", n(12.0))])),
                ("chocolate_dipped_brownies", g(vec![("price", n(50.0)), ("minimum", n(12.0))])),
                ("double_chocolate_oatmeal_cookies", g(vec![("price", n(35.0)), ("minimum", n(6.0))])),
            ])),
        ),
        rec(
            "14-chewy-cookies.jpeg",
            &[
                "cookie", "cookies", "chewy", "soft", "baked", "treats", "dessert", "sweet",
                "snack", "chocolate chip", "red velvet", "oreo", "stuffed", "homemade",
                "2025 menu",
            ],
            r#"CupcakeLab 2025 Chewy Cookies Menu

• Red Velvet Chewy Choco Chip Cookies: Bite-size portions, studded with Hershey’s cream cheese chocolate chips.
• Chewy Choco Chip Cookies: Bite-size portions, studded with Hershey’s semi-sweet chocolate chips.
  Box of 12 (3.5"x5"x1"): P150
  12pcs/120g/300ml (4"x3"): P170
  25pcs/250g/500ml (5"x3.5"): P350
  50pcs/500g/1L (5"x4.75"): P650
• Oreo Stuffed Cookies: Chewy choco chip cookies, stuffed with a whole Oreo.
• Oreo Stuffed Red Velvet Cookies: Chewy red velvet cookies, stuffed with a whole Oreo.
  7pcs/250g: P350
  15pcs/500g: P650
  45pcs/2kg: P1,950"#,
            Category::General,
            Some(g(vec![
                (
                    "red_velvet_chewy_choco_chip",
                    g(vec![
                        ("box_12", n(150.0)),
                        ("pack_12_120g_300ml", n(170.0)),
                        ("pack_25_250g_500ml", n(350.0)),
                        ("pack_50_500g_1l", n(650.0)),
                    ]),
                ),
                (
                    "chewy_choco_chip",
                    g(vec![
                        ("box_12", n(150.0)),
                        ("pack_12_120g_300ml", n(170.0)),
                        ("pack_25_250g_500ml", n(350.0)),
                        ("pack_50_500g_1l", n(650.0)),
                    ]),
                ),
                (
                    "oreo_stuffed_cookies",
                    g(vec![
                        ("pack_7_250g", n(350.0)),
                        ("pack_15_500g", n(650.0)),
                        ("pack_45_2kg", n(1950.0)),
                    ]),
                ),
                (
                    "oreo_stuffed_red_velvet",
                    g(vec![
                        ("pack_7_250g", n(350.0)),
                        ("pack_15_500g", n(650.0)),
                        ("pack_45_2kg", n(1950.0)),
                    ]),
                ),
            ])),
        ),
        rec(
            "15-diy-kits.jpeg",
            &[
                "diy", "kit", "kits", "do it yourself", "home baking", "baking kit", "learn",
                "tutorial", "ingredients", "instructions", "family fun", "cupcake kit",
                "pinata kit", "2025 menu",
            ],
            r#"CupcakeLab 2025 DIY Kits Menu

• 2-Cupcake DIY Kit: Minimum 5 kits. Each kit includes 2 cupcakes, 2 fondant toppers (2 colors), 2 kinds of sprinkles, buttercream, design guide, kit checklist. Starts at P350.00
• 4-Cupcake DIY Kit: Minimum 5 kits. Each kit includes 4 cupcakes, 4 fondant toppers (4 colors), 3 kinds of sprinkles, buttercream, design guide, kit checklist. Starts at P550.00
• DIY Pinata Kit: Minimum 5 kits. Each kit includes 1 chocolate pinata, wooden mallet, marshmallows & meringue, 4 cupcakes, 4 fondant toppers (4 colors), 3 kinds of sprinkles, buttercream, design guide, kit checklist. Starts at P1,100.00

*Minimum of 5 kits for customized kits. Final price will depend on agreed upon design.*"#,
            Category::DiyKits,
            Some(g(vec![
                ("diy_2cupcake_kit", g(vec![("min_order", n(5.0)), ("price", n(350.0))])),
                ("diy_4cupcake_kit", g(vec![("min_order", n(5.0)), ("price", n(550.0))])),
                ("diy_pinata_kit", g(vec![("min_order", n(5.0)), ("price", n(1100.0))])),
                ("custom_kit", g(vec![("min_order", n(5.0)), ("price", q("depends on design"))])),
            ])),
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::lowest_price;

    #[test]
    fn catalog_has_the_full_menu() {
        assert_eq!(CATALOG.len(), 13);
        assert!(CATALOG.iter().all(|r| !r.keywords.is_empty()));
        assert!(CATALOG.iter().all(|r| !r.description.is_empty()));
    }

    #[test]
    fn basic_cakes_lowest_price_is_the_six_inch_red_velvet() {
        let basic = CATALOG
            .iter()
            .find(|r| r.filename == "4-basic-cakes.jpeg")
            .unwrap();
        assert_eq!(lowest_price(basic.prices.as_ref().unwrap()), 1200.0);
    }
}
