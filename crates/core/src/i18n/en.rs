pub(super) const STRINGS: &[(&str, &str)] = &[
    // Layout
    ("nav.home", "Home"),
    ("nav.products", "Products"),
    ("nav.production", "Production"),
    ("nav.company", "Company"),
    ("nav.news", "News"),
    ("nav.contacts", "Contacts"),
    ("btn.ai", "AI Consultant"),
    ("btn.quote", "Get a Quote"),
    ("brand.tagline", "Industrial Solutions"),
    ("topbar.delivery", "Global Delivery: Russia, CIS, Europe"),
    ("topbar.hq", "HQ: Novosibirsk, Russia"),
    ("lang.switch", "Language"),
    (
        "footer.desc",
        "Manufacturer of PET strapping and supplier of industrial packaging materials since 2015.",
    ),
    ("footer.rights", "© TuranPET. All rights reserved."),
    ("footer.privacy", "Privacy Policy"),
    ("footer.terms", "Terms of Service"),
    // Categories
    ("cat.pet", "PET Strap"),
    ("cat.film", "Stretch Film"),
    ("cat.boxes", "Boxes"),
    ("cat.tools", "Tools"),
    ("cat.consumables", "Consumables"),
    ("subcat.all", "All"),
    ("subcat.embossed", "Embossed"),
    ("subcat.smooth", "Smooth"),
    ("subcat.manual", "Manual"),
    ("subcat.machine", "Machine"),
    ("subcat.4-flap", "4-Flap"),
    ("subcat.food", "Food Grade"),
    ("subcat.self-assembling", "Self-Assembling"),
    ("subcat.sheets", "Sheets"),
    ("subcat.battery", "Battery"),
    ("subcat.pneumatic", "Pneumatic"),
    // Catalog
    ("catalog.title", "Product Catalog"),
    (
        "catalog.subtitle",
        "Strapping, film, corrugated packaging and tools for warehouses and production lines.",
    ),
    ("catalog.all", "All"),
    ("catalog.view", "Details"),
    ("catalog.empty", "No products found in this category."),
    ("catalog.more", "Also available"),
    ("catalog.straps_link", "Strap inventory by material"),
    ("catalog.tools_link", "Application tool shop"),
    // Product detail
    ("detail.back", "Back to catalog"),
    ("detail.quality", "Certified Quality"),
    ("detail.quality_sub", "Every batch is tested in our laboratory"),
    ("detail.shipping", "Fast Shipping"),
    ("detail.shipping_sub", "Dispatch from Novosibirsk warehouses"),
    ("detail.specs", "Technical Specifications"),
    ("detail.availability", "Availability"),
    ("detail.instock", "In Stock"),
    ("detail.outofstock", "On Order"),
    ("detail.req_quote", "Request a Quote"),
    ("detail.moq", "Minimum order quantity applies. Contact sales for volume pricing."),
    ("detail.per_unit", "pc"),
    // Strap inventory
    ("straps.title", "Strapping Inventory"),
    (
        "straps.subtitle",
        "Coils in stock for immediate dispatch, graded by material and break strength.",
    ),
    ("straps.all_materials", "All Materials"),
    ("straps.width", "width"),
    ("straps.break_strength", "Break Strength"),
    ("straps.thickness", "Thickness"),
    ("straps.per_coil", "/ coil"),
    ("straps.empty", "No coils of this material in stock."),
    // Tool shop
    ("tools.title", "Application Tools"),
    (
        "tools.subtitle",
        "Professional grade equipment for high-volume strapping operations.",
    ),
    ("tools.service", "Service & Repair"),
    ("tools.service_desc", "We service all major tool brands."),
    ("tools.batteries", "Spare Batteries"),
    ("tools.batteries_desc", "Keep your operation running 24/7."),
    // Contact
    ("contact.title", "Contact Us"),
    (
        "contact.subtitle",
        "Our sales team in Novosibirsk answers quote requests within one business day.",
    ),
    ("contact.sales", "Sales Department"),
    ("contact.sales_desc", "Prices, availability and delivery terms."),
    ("contact.working_hours", "Working Hours"),
    ("contact.mon_fri", "Mon - Fri"),
    ("contact.sat", "Saturday"),
    ("contact.sun", "Sunday"),
    ("contact.closed", "Closed"),
    ("contact.hours_weekday", "9:00 AM - 6:00 PM"),
    ("contact.hours_saturday", "10:00 AM - 2:00 PM"),
    ("contact.production_hq", "Production & HQ"),
    ("contact.warehouses", "Warehouses"),
    ("contact.viewing", "Viewing: "),
    ("contact.map_of", "Map of"),
    // Blog
    ("blog.title", "News & Insights"),
    ("blog.subtitle", "Company news and practical notes on load securing."),
    ("blog.read_more", "Read more"),
    // About
    ("about.title", "About TuranPET"),
    (
        "about.subtitle",
        "From recycled bottles to high-tension strap: a vertically integrated packaging manufacturer.",
    ),
    ("about.h2", "Our Story"),
    (
        "about.p1",
        "TuranPET began in 2015 with a single extrusion line in Mary, Turkmenistan, turning recycled PET flake into strapping for local brick plants.",
    ),
    (
        "about.p2",
        "Today our production feeds warehouses in Novosibirsk that supply strap, film, boxes and tools to customers across Russia, the CIS and Europe.",
    ),
    ("about.founded", "Founded"),
    ("about.output", "Monthly output"),
    (
        "about.quote",
        "We control quality from the raw flake to the final coil.",
    ),
    ("about.value1", "Sustainability"),
    (
        "about.value1_desc",
        "Our \"Bottle-to-Strap\" technology reduces plastic waste. Our PET strap is 100% recyclable.",
    ),
    ("about.value2", "Quality Control"),
    (
        "about.value2_desc",
        "Every batch undergoes tensile strength, elongation, and split resistance testing in our on-site laboratory.",
    ),
    ("about.value3", "Reliability"),
    (
        "about.value3_desc",
        "With warehouses in Novosibirsk, we guarantee stable supply chains for our Russian and European partners.",
    ),
    // Production
    ("prod.title", "Production"),
    ("prod.subtitle", "From flake to coil"),
    ("prod.step1", "Raw Material"),
    (
        "prod.step1_desc",
        "Sorted and washed PET bottle flake is dried and crystallized.",
    ),
    ("prod.step2", "Extrusion"),
    (
        "prod.step2_desc",
        "The melt is extruded through a flat die and cooled in a water bath.",
    ),
    ("prod.step3", "Stretching"),
    (
        "prod.step3_desc",
        "Heated draw rolls orient the polymer chains for tensile strength.",
    ),
    ("prod.step4", "Embossing & Winding"),
    (
        "prod.step4_desc",
        "The strap is embossed, cooled and wound onto cores with precise tension.",
    ),
    ("prod.lab_title", "Quality Laboratory"),
    (
        "prod.lab_desc",
        "Samples from every shift are tested before a batch is released to the warehouse.",
    ),
    ("prod.lab_test1", "Break Strength Testing (ASTM D3950)"),
    ("prod.lab_test2", "Elongation Recovery Analysis"),
    ("prod.lab_test3", "Camber and Curl Measurement"),
    ("prod.lab_test4", "Joint Efficiency Testing"),
    // Home
    ("hero.badge", "Manufacturer & Distributor"),
    ("hero.title1", "Industrial Packaging"),
    ("hero.title2", "Built for Heavy Loads"),
    (
        "hero.desc",
        "PET strap from our own production, stretch film, corrugated boxes and strapping tools. Shipped from stock in Novosibirsk.",
    ),
    ("hero.btn_products", "View Products"),
    ("hero.btn_contact", "Contact Sales"),
    ("stats.quality", "Certified Quality"),
    ("stats.quality_desc", "Laboratory tested every shift"),
    ("stats.logistics", "Own Logistics"),
    ("stats.logistics_desc", "Warehouses in Novosibirsk"),
    ("stats.pricing", "Factory Pricing"),
    ("stats.pricing_desc", "Direct from the manufacturer"),
    ("intro.title", "Everything to Secure Your Cargo"),
    (
        "intro.desc",
        "We produce PET strapping and source the film, boxes, seals and tools that go with it, so one order covers the whole packing line.",
    ),
    // Packaging advisor
    ("assistant.title", "PACKAGING EXPERT AI"),
    ("assistant.subtitle", "Logistics & Engineering Support"),
    (
        "assistant.greeting",
        "Hello. I am **StrapMaster**, your industrial packaging consultant. I can assist with load containment calculations and tool selection. How can I help secure your cargo today?",
    ),
    ("assistant.error", "Communication error with logistics server."),
    (
        "assistant.fallback",
        "I'm sorry, I couldn't generate advice at this moment.",
    ),
    ("assistant.placeholder", "Ask about strapping, film or tools..."),
    ("assistant.send", "Send"),
    ("assistant.thinking", "StrapMaster is typing..."),
    ("assistant.close", "Close"),
    ("assistant.suggested_1", "What is the break strength of 19mm PET?"),
    ("assistant.suggested_2", "Difference between PET and Steel strap?"),
    ("assistant.suggested_3", "Best tool for heavy brick pallets?"),
    // Logistics visualizer
    ("viz.title", "Logistics Visualizer"),
    (
        "viz.desc",
        "Visualize warehouse layouts, pallet configurations, and strap applications.",
    ),
    (
        "viz.placeholder",
        "e.g., Automatic strapping machine on a conveyor belt, industrial warehouse",
    ),
    ("viz.button", "Visualize"),
    ("viz.rendering", "Rendering..."),
    ("viz.generating", "Generating schematic..."),
    ("viz.empty", "Enter a packaging scenario above."),
    ("viz.examples", "Examples:"),
    ("viz.export", "Export"),
    ("viz.result_alt", "Generated Logistics Scene"),
    ("viz.error", "Failed to generate visualization."),
    ("viz.example_1", "Stacks of lumber secured with green PET strap"),
    ("viz.example_2", "Forklift moving pallet in large warehouse"),
    ("viz.example_3", "Worker using battery strapping tool"),
];
