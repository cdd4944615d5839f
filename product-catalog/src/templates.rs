//! Fixed response copy: category blurbs, disclaimers, and FAQ blocks.

use crate::record::Category;

pub(crate) const CUPCAKES_BLURB: &str = "Welcome to Cupcake Lab! 🧁 We specialize in custom decorated cupcakes that are perfect for any celebration. Here are some examples of our beautiful creations:

*Minimum order: 6 pcs for regular cupcakes (same flavor)*
*We make one of the best Red Velvets in Manila!* 😊

Feel free to ask about our flavors and custom designs!";

pub(crate) const CAKES_BLURB: &str = "Check out our beautiful cakes! 🎂 We create both basic and custom cakes for all occasions:

*Basic cakes: Available in various sizes and flavors*
*Custom designs available with 7-day lead time*
*Perfect for weddings, birthdays, and special celebrations!*

What type of cake are you looking for?";

pub(crate) const BAKING_EQUIPMENT_BLURB: &str = "Great question about baking! 👩‍🍳 We also offer professional baking equipment and tools:

*Professional-grade cake tins and baking pans*
*Perfect for achieving bakery-quality results at home*
*Available for purchase or as part of our DIY kits*

Interested in our baking supplies?";

pub(crate) const DIY_KITS_BLURB: &str = "Love baking at home? 👩‍🍳 Our DIY kits make it easy and fun:

*Minimum order: 5 kits per order*
*Everything you need to create delicious treats at home!*
*Includes ingredients, tools, and step-by-step instructions*
*Perfect for family bonding and learning new skills*

Which DIY kit interests you most?";

pub(crate) const GENERAL_BLURB: &str = "Here are some wonderful options from our Cupcake Lab collection! 🍰

We offer a wide variety of treats including:
• Custom cupcakes and cakes
• Gift packages and corporate orders
• Specialty desserts and cookies
• DIY baking kits

What would you like to know more about?";

/// Marketing blurb for a category; categories without dedicated copy fall
/// back to the general one.
pub(crate) fn blurb_for(category: Category) -> &'static str {
    match category {
        Category::Cupcakes => CUPCAKES_BLURB,
        Category::Cakes => CAKES_BLURB,
        Category::BakingEquipment => BAKING_EQUIPMENT_BLURB,
        Category::DiyKits => DIY_KITS_BLURB,
        Category::CakeTins | Category::General => GENERAL_BLURB,
    }
}

pub(crate) const ALLERGEN_FOOTER: &str = "*For specific allergen information and detailed ingredient lists, please contact us directly as we want to ensure we provide the most accurate and up-to-date information for your safety.*

*Common allergens in our products may include: eggs, dairy, wheat, nuts, and soy.*";

pub(crate) const SIZE_FOOTER: &str = "*Cake serving guide: 6\" serves 8-10 people, 8\" serves 12-15 people, 10\" serves 20-25 people*
*All basic cakes have 2 layers*";

pub(crate) const FLAVOR_FOOTER: &str =
    "*We can also create custom flavors for special orders with advance notice!*";

pub(crate) const CUSTOMIZATION_FOOTER: &str = "*Custom designs require 7-day lead time*
*Contact us to discuss your specific design requirements!*";

pub(crate) const DELIVERY_INFO: &str = "**Delivery & Pickup Information:**

🚗 **Pickup:** Free pickup from our location
🚚 **Delivery:** Available with rates depending on location
🎂 **For cakes:** We recommend car pickup/delivery for best results

**Lead Times:**
• Basic items: Can often be prepared same day or next day
• Custom designs: 7-day advance notice required
• Large orders: Please contact us for scheduling

**Areas we deliver to:** Metro Manila and nearby areas
*Delivery fees vary by distance - contact us for exact rates*

*For special events and large orders, we can arrange special delivery arrangements.*";

pub(crate) const ORDERING_PROCESS: &str = "
**Ordering Process:**
1. Browse our menu and decide what you'd like
2. Contact us via message or call
3. Discuss customization details if needed
4. Confirm your order and payment method
5. We'll prepare your delicious treats!

**Payment:** We accept cash, bank transfer, and major payment methods
**Lead Time:**
• Regular items: Same day or next day
• Custom designs: 7 days advance notice
• Large orders: Contact us for scheduling

*Contact us directly to place your order and discuss any special requirements!*";

pub(crate) const PRICE_FOOTER: &str = "
*Prices are in Philippine Pesos (₱)*
*For custom orders, please contact us for a personalized quote!*";
