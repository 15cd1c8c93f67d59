pub(super) const STRINGS: &[(&str, &str)] = &[
    // Layout
    ("nav.home", "Главная"),
    ("nav.products", "Продукция"),
    ("nav.production", "Производство"),
    ("nav.company", "О компании"),
    ("nav.news", "Новости"),
    ("nav.contacts", "Контакты"),
    ("btn.ai", "AI Консультант"),
    ("btn.quote", "Запросить цену"),
    ("brand.tagline", "Промышленные решения"),
    ("topbar.delivery", "Доставка: Россия, СНГ, Европа"),
    ("topbar.hq", "Офис: Новосибирск, Россия"),
    ("lang.switch", "Язык"),
    (
        "footer.desc",
        "Производитель ПЭТ ленты и поставщик промышленной упаковки с 2015 года.",
    ),
    ("footer.rights", "© TuranPET. Все права защищены."),
    ("footer.privacy", "Политика конфиденциальности"),
    ("footer.terms", "Условия использования"),
    // Categories
    ("cat.pet", "ПЭТ лента"),
    ("cat.film", "Стрейч-пленка"),
    ("cat.boxes", "Коробки"),
    ("cat.tools", "Инструменты"),
    ("cat.consumables", "Расходники"),
    ("subcat.all", "Все"),
    ("subcat.embossed", "Тисненая"),
    ("subcat.smooth", "Гладкая"),
    ("subcat.manual", "Ручная"),
    ("subcat.machine", "Машинная"),
    ("subcat.4-flap", "Четырехклапанные"),
    ("subcat.food", "Пищевые"),
    ("subcat.self-assembling", "Самосборные"),
    ("subcat.sheets", "Гофролисты"),
    ("subcat.battery", "Аккумуляторные"),
    ("subcat.pneumatic", "Пневматические"),
    // Catalog
    ("catalog.title", "Каталог продукции"),
    (
        "catalog.subtitle",
        "Лента, пленка, гофроупаковка и инструмент для складов и производственных линий.",
    ),
    ("catalog.all", "Все"),
    ("catalog.view", "Подробнее"),
    ("catalog.empty", "В этой категории пока нет товаров."),
    ("catalog.more", "Также в наличии"),
    ("catalog.straps_link", "Лента по материалам"),
    ("catalog.tools_link", "Магазин инструмента"),
    // Product detail
    ("detail.back", "Назад в каталог"),
    ("detail.quality", "Сертифицированное качество"),
    ("detail.quality_sub", "Каждая партия проходит лабораторные испытания"),
    ("detail.shipping", "Быстрая отгрузка"),
    ("detail.shipping_sub", "Со складов в Новосибирске"),
    ("detail.specs", "Технические характеристики"),
    ("detail.availability", "Наличие"),
    ("detail.instock", "В наличии"),
    ("detail.outofstock", "Под заказ"),
    ("detail.req_quote", "Запросить цену"),
    (
        "detail.moq",
        "Действует минимальная партия. Оптовые цены уточняйте в отделе продаж.",
    ),
    ("detail.per_unit", "шт"),
    // Strap inventory
    ("straps.title", "Склад ленты"),
    (
        "straps.subtitle",
        "Бухты в наличии для немедленной отгрузки, по материалу и разрывной нагрузке.",
    ),
    ("straps.all_materials", "Все материалы"),
    ("straps.width", "ширина"),
    ("straps.break_strength", "Разрывная нагрузка"),
    ("straps.thickness", "Толщина"),
    ("straps.per_coil", "/ бухта"),
    ("straps.empty", "Ленты из этого материала нет в наличии."),
    // Tool shop
    ("tools.title", "Инструмент для обвязки"),
    (
        "tools.subtitle",
        "Профессиональное оборудование для интенсивной обвязки.",
    ),
    ("tools.service", "Сервис и ремонт"),
    ("tools.service_desc", "Обслуживаем инструмент всех ведущих марок."),
    ("tools.batteries", "Запасные аккумуляторы"),
    ("tools.batteries_desc", "Ваша линия работает круглосуточно."),
    // Contact
    ("contact.title", "Контакты"),
    (
        "contact.subtitle",
        "Отдел продаж в Новосибирске отвечает на запросы в течение одного рабочего дня.",
    ),
    ("contact.sales", "Отдел продаж"),
    ("contact.sales_desc", "Цены, наличие и условия доставки."),
    ("contact.working_hours", "Часы работы"),
    ("contact.mon_fri", "Пн - Пт"),
    ("contact.sat", "Суббота"),
    ("contact.sun", "Воскресенье"),
    ("contact.closed", "Выходной"),
    ("contact.hours_weekday", "9:00 - 18:00"),
    ("contact.hours_saturday", "10:00 - 14:00"),
    ("contact.production_hq", "Производство и офис"),
    ("contact.warehouses", "Склады"),
    ("contact.viewing", "Просмотр: "),
    ("contact.map_of", "Карта:"),
    // Blog
    ("blog.title", "Новости и статьи"),
    ("blog.subtitle", "Новости компании и практические заметки о креплении груза."),
    ("blog.read_more", "Читать далее"),
    // About
    ("about.title", "О компании TuranPET"),
    (
        "about.subtitle",
        "От переработанных бутылок до высокопрочной ленты: производитель полного цикла.",
    ),
    ("about.h2", "Наша история"),
    (
        "about.p1",
        "TuranPET начинался в 2015 году с одной линии экструзии в Мары, Туркменистан, выпускавшей ленту из вторичного ПЭТ для местных кирпичных заводов.",
    ),
    (
        "about.p2",
        "Сегодня наше производство снабжает склады в Новосибирске, откуда лента, пленка, коробки и инструмент поставляются клиентам по России, СНГ и Европе.",
    ),
    ("about.founded", "Основана"),
    ("about.output", "Выпуск в месяц"),
    (
        "about.quote",
        "Мы контролируем качество от сырья до готовой бухты.",
    ),
    ("about.value1", "Экологичность"),
    (
        "about.value1_desc",
        "Технология «Бутылка в ленту» сокращает пластиковые отходы. Наша ПЭТ лента полностью перерабатывается.",
    ),
    ("about.value2", "Контроль качества"),
    (
        "about.value2_desc",
        "Каждая партия проходит испытания на разрыв, удлинение и расслоение в собственной лаборатории.",
    ),
    ("about.value3", "Надежность"),
    (
        "about.value3_desc",
        "Склады в Новосибирске гарантируют стабильные поставки для партнеров в России и Европе.",
    ),
    // Production
    ("prod.title", "Производство"),
    ("prod.subtitle", "От флексы до бухты"),
    ("prod.step1", "Сырье"),
    (
        "prod.step1_desc",
        "Отсортированная и промытая ПЭТ флекса сушится и кристаллизуется.",
    ),
    ("prod.step2", "Экструзия"),
    (
        "prod.step2_desc",
        "Расплав выдавливается через плоскощелевую головку и охлаждается в ванне.",
    ),
    ("prod.step3", "Ориентация"),
    (
        "prod.step3_desc",
        "Нагретые вытяжные валы ориентируют полимер для прочности на разрыв.",
    ),
    ("prod.step4", "Тиснение и намотка"),
    (
        "prod.step4_desc",
        "Лента тиснится, охлаждается и наматывается на втулки с точным натяжением.",
    ),
    ("prod.lab_title", "Лаборатория качества"),
    (
        "prod.lab_desc",
        "Образцы каждой смены испытываются до отгрузки партии на склад.",
    ),
    ("prod.lab_test1", "Испытание на разрыв (ASTM D3950)"),
    ("prod.lab_test2", "Анализ восстановления после удлинения"),
    ("prod.lab_test3", "Измерение серповидности и скручивания"),
    ("prod.lab_test4", "Испытание прочности соединения"),
    // Home
    ("hero.badge", "Производитель и дистрибьютор"),
    ("hero.title1", "Промышленная упаковка"),
    ("hero.title2", "для тяжелых грузов"),
    (
        "hero.desc",
        "ПЭТ лента собственного производства, стрейч-пленка, гофрокоробки и инструмент для обвязки. Отгрузка со склада в Новосибирске.",
    ),
    ("hero.btn_products", "Смотреть продукцию"),
    ("hero.btn_contact", "Связаться с нами"),
    ("stats.quality", "Сертифицированное качество"),
    ("stats.quality_desc", "Лабораторный контроль каждой смены"),
    ("stats.logistics", "Своя логистика"),
    ("stats.logistics_desc", "Склады в Новосибирске"),
    ("stats.pricing", "Цены производителя"),
    ("stats.pricing_desc", "Напрямую с завода"),
    ("intro.title", "Все для надежной упаковки груза"),
    (
        "intro.desc",
        "Мы производим ПЭТ ленту и поставляем пленку, коробки, пряжки и инструмент к ней, чтобы один заказ закрывал всю упаковочную линию.",
    ),
    // Packaging advisor
    ("assistant.title", "AI ЭКСПЕРТ"),
    ("assistant.subtitle", "Поддержка Логистики"),
    (
        "assistant.greeting",
        "Здравствуйте. Я **StrapMaster**, ваш консультант по промышленной упаковке. Я помогу с расчетами нагрузок и подбором ленты. Чем могу помочь?",
    ),
    ("assistant.error", "Ошибка связи с сервером."),
    (
        "assistant.fallback",
        "К сожалению, сейчас я не могу дать совет.",
    ),
    ("assistant.placeholder", "Спросите о ленте, пленке или инструменте..."),
    ("assistant.send", "Отправить"),
    ("assistant.thinking", "StrapMaster печатает..."),
    ("assistant.close", "Закрыть"),
    ("assistant.suggested_1", "Какая разрывная нагрузка у 19мм ПЭТ?"),
    ("assistant.suggested_2", "В чем разница между ПЭТ и сталью?"),
    ("assistant.suggested_3", "Какой инструмент нужен для кирпича?"),
    // Logistics visualizer
    ("viz.title", "Визуализатор логистики"),
    (
        "viz.desc",
        "Визуализируйте схемы склада, конфигурации паллет и применение ленты.",
    ),
    (
        "viz.placeholder",
        "например: автомат обвязки на конвейере, промышленный склад",
    ),
    ("viz.button", "Визуализировать"),
    ("viz.rendering", "Рендеринг..."),
    ("viz.generating", "Создаем схему..."),
    ("viz.empty", "Опишите сценарий упаковки выше."),
    ("viz.examples", "Примеры:"),
    ("viz.export", "Скачать"),
    ("viz.result_alt", "Сгенерированная сцена"),
    ("viz.error", "Не удалось создать визуализацию."),
    ("viz.example_1", "Пакеты пиломатериалов, обвязанные зеленой ПЭТ лентой"),
    ("viz.example_2", "Погрузчик перевозит паллет на большом складе"),
    ("viz.example_3", "Рабочий с аккумуляторным инструментом для обвязки"),
];
