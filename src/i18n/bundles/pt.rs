use crate::i18n::MessageBundle;

/// Portuguese (Brazil) strings
pub const PT: MessageBundle = MessageBundle {
    direction: None,
    language_tag: Some("pt-BR"),

    // Shared
    greeting: "Olá, {name},",
    team_signature: "Equipe Amanoba",

    // Welcome
    welcome_subject: "Boas-vindas ao {course}!",
    welcome_heading: "Sua jornada de aprendizado começa hoje",
    welcome_intro: "Você se inscreveu em {course}. Nos próximos {days} dias, você receberá uma lição curta por dia.",
    welcome_tip: "Reserve de 10 a 15 minutos por dia e você verá um progresso real até o fim do curso.",
    welcome_cta: "Começar a aprender",

    // Completion
    completion_subject: "Parabéns, você concluiu {course}!",
    completion_heading: "Você conseguiu, {name}!",
    completion_body: "Você concluiu todas as lições de {course}. Seu certificado já está disponível no seu painel.",
    completion_recommended_heading: "Próximos cursos recomendados",
    completion_cta: "Ver mais cursos",
    upsell_beginner: None,
    upsell_intermediate: None,
    upsell_advanced: None,

    // Reminder
    reminder_subject: "O dia {day} de {course} está esperando por você",
    reminder_heading: "Sua lição do dia {day} está pronta",
    reminder_body: "Mantenha o ritmo em {course}. A lição de hoje leva só alguns minutos.",
    reminder_cta: "Abrir o dia {day}",

    // Payment
    payment_subject: "Pagamento confirmado: {course}",
    payment_heading: "Obrigado pela sua compra",
    payment_body: "Seu pagamento de {course} foi aprovado e seu acesso já está ativo.",
    payment_amount_label: "Valor pago",
    payment_expiry_label: "Acesso válido até",
    payment_transaction_label: "ID da transação",
    payment_cta_course: "Ver curso",
    payment_cta_browse: "Explorar cursos",
    payment_support: "Dúvidas sobre o pagamento? Escreva para {email}.",

    // Footers
    footer_lesson_reason: "Você está recebendo este e-mail porque se inscreveu em {course}.",
    footer_payment_reason: "Você está recebendo este e-mail porque fez uma compra na Amanoba.",
    footer_unsubscribe: "Cancelar inscrição",
};
