use crate::i18n::MessageBundle;

/// Bulgarian strings
pub const BG: MessageBundle = MessageBundle {
    direction: None,
    language_tag: None,

    // Shared
    greeting: "Здравей, {name},",
    team_signature: "Екипът на Amanoba",

    // Welcome
    welcome_subject: "Добре дошли в {course}!",
    welcome_heading: "Твоето учебно пътешествие започва днес",
    welcome_intro: "Записа се за {course}. През следващите {days} дни всеки ден ще получаваш по един кратък урок.",
    welcome_tip: "Отделяй по 10–15 минути на ден и до края на курса ще видиш истински напредък.",
    welcome_cta: "Започни да учиш",

    // Completion
    completion_subject: "Поздравления, завърши {course}!",
    completion_heading: "Успя, {name}!",
    completion_body: "Премина всички уроци от {course}. Сертификатът ти вече е наличен в таблото ти.",
    completion_recommended_heading: "Препоръчани следващи курсове",
    completion_cta: "Разгледай още курсове",
    upsell_beginner: None,
    upsell_intermediate: None,
    upsell_advanced: None,

    // Reminder
    reminder_subject: "Ден {day} от {course} те очаква",
    reminder_heading: "Урокът ти за ден {day} е готов",
    reminder_body: "Продължи поредицата си в {course}. Днешният урок отнема само няколко минути.",
    reminder_cta: "Отвори ден {day}",

    // Payment
    payment_subject: "Плащането е потвърдено: {course}",
    payment_heading: "Благодарим ти за покупката",
    payment_body: "Плащането ти за {course} е успешно и достъпът ти вече е активен.",
    payment_amount_label: "Платена сума",
    payment_expiry_label: "Достъпът е валиден до",
    payment_transaction_label: "Номер на транзакцията",
    payment_cta_course: "Виж курса",
    payment_cta_browse: "Разгледай курсовете",
    payment_support: "Имаш въпроси за плащането? Пиши ни на {email}.",

    // Footers
    footer_lesson_reason: "Получаваш този имейл, защото си записан за {course}.",
    footer_payment_reason: "Получаваш този имейл, защото направи покупка в Amanoba.",
    footer_unsubscribe: "Отписване",
};
