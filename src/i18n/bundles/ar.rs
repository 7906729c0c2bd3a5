use crate::i18n::MessageBundle;

/// Arabic strings (right-to-left via the registry default)
pub const AR: MessageBundle = MessageBundle {
    direction: None,
    language_tag: None,

    // Shared
    greeting: "مرحبًا {name}،",
    team_signature: "فريق Amanoba",

    // Welcome
    welcome_subject: "مرحبًا بك في {course}!",
    welcome_heading: "رحلتك التعليمية تبدأ اليوم",
    welcome_intro: "لقد سجّلت في {course}. خلال الأيام الـ{days} القادمة ستتلقى درسًا قصيرًا كل يوم.",
    welcome_tip: "خصّص من 10 إلى 15 دقيقة يوميًا وسترى تقدمًا حقيقيًا بنهاية الدورة.",
    welcome_cta: "ابدأ التعلّم",

    // Completion
    completion_subject: "تهانينا، لقد أكملت {course}!",
    completion_heading: "لقد نجحت يا {name}!",
    completion_body: "أنهيت جميع دروس {course}. شهادتك متاحة الآن في لوحة التحكم.",
    completion_recommended_heading: "دورات مقترحة لك",
    completion_cta: "تصفّح المزيد من الدورات",
    upsell_beginner: None,
    upsell_intermediate: None,
    upsell_advanced: None,

    // Reminder
    reminder_subject: "اليوم {day} من {course} بانتظارك",
    reminder_heading: "درس اليوم {day} جاهز",
    reminder_body: "حافظ على استمراريتك في {course}. درس اليوم يستغرق بضع دقائق فقط.",
    reminder_cta: "افتح اليوم {day}",

    // Payment
    payment_subject: "تم تأكيد الدفع: {course}",
    payment_heading: "شكرًا لك على الشراء",
    payment_body: "تمت عملية الدفع لـ {course} بنجاح وأصبح وصولك مفعّلًا الآن.",
    payment_amount_label: "المبلغ المدفوع",
    payment_expiry_label: "الوصول صالح حتى",
    payment_transaction_label: "رقم المعاملة",
    payment_cta_course: "عرض الدورة",
    payment_cta_browse: "تصفّح الدورات",
    payment_support: "هل لديك أسئلة حول الدفع؟ راسلنا على {email}.",

    // Footers
    footer_lesson_reason: "تتلقى هذه الرسالة لأنك مسجّل في {course}.",
    footer_payment_reason: "تتلقى هذه الرسالة لأنك أجريت عملية شراء على Amanoba.",
    footer_unsubscribe: "إلغاء الاشتراك",
};
