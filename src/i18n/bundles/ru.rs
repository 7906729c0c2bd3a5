use crate::i18n::MessageBundle;

/// Russian strings
pub const RU: MessageBundle = MessageBundle {
    direction: None,
    language_tag: None,

    // Shared
    greeting: "Привет, {name}!",
    team_signature: "Команда Amanoba",

    // Welcome
    welcome_subject: "Добро пожаловать на курс {course}!",
    welcome_heading: "Ваше обучение начинается сегодня",
    welcome_intro: "Вы записались на курс {course}. В течение следующих {days} дней вы будете каждый день получать один короткий урок.",
    welcome_tip: "Уделяйте 10–15 минут в день, и к концу курса вы увидите настоящий прогресс.",
    welcome_cta: "Начать обучение",

    // Completion
    completion_subject: "Поздравляем, вы завершили курс {course}!",
    completion_heading: "У вас получилось, {name}!",
    completion_body: "Вы прошли все уроки курса {course}. Ваш сертификат уже доступен в личном кабинете.",
    completion_recommended_heading: "Рекомендуемые курсы",
    completion_cta: "Смотреть другие курсы",
    upsell_beginner: None,
    upsell_intermediate: None,
    upsell_advanced: None,

    // Reminder
    reminder_subject: "День {day} курса {course} ждёт вас",
    reminder_heading: "Урок на день {day} готов",
    reminder_body: "Не прерывайте серию занятий в курсе {course}. Сегодняшний урок займёт всего несколько минут.",
    reminder_cta: "Открыть день {day}",

    // Payment
    payment_subject: "Оплата подтверждена: {course}",
    payment_heading: "Спасибо за покупку",
    payment_body: "Оплата курса {course} прошла успешно, доступ уже активирован.",
    payment_amount_label: "Сумма оплаты",
    payment_expiry_label: "Доступ действует до",
    payment_transaction_label: "Номер транзакции",
    payment_cta_course: "Перейти к курсу",
    payment_cta_browse: "Смотреть курсы",
    payment_support: "Есть вопросы по оплате? Напишите нам на {email}.",

    // Footers
    footer_lesson_reason: "Вы получили это письмо, потому что записались на курс {course}.",
    footer_payment_reason: "Вы получили это письмо, потому что совершили покупку на Amanoba.",
    footer_unsubscribe: "Отписаться",
};
