//! Built-in template schema catalog.
//!
//! One [`TemplateSchema`] per greeting-card template. Common fields follow a
//! fixed pattern (`recipientName`, `mainMessage`, `musicUrl`); templates with
//! per-style games or layouts additionally declare style-restricted fields.

use crate::schema::DesignStyle::{Classic, Eglenceli, Minimalist, Modern};
use crate::schema::{FieldDescriptor, TemplateSchema};

fn recipient_name() -> FieldDescriptor {
    FieldDescriptor::text(
        "recipientName",
        "Gönderilecek Kişi Adı",
        "Mesajı alacak kişinin adını girin",
    )
    .required()
    .max_length(50)
}

fn music_url() -> FieldDescriptor {
    FieldDescriptor::text(
        "musicUrl",
        "YouTube Müzik Linki (İsteğe Bağlı)",
        "https://www.youtube.com/watch?v=... veya video ID",
    )
    .max_length(200)
}

fn main_message(placeholder: &str, default: &str) -> FieldDescriptor {
    FieldDescriptor::textarea("mainMessage", "Ana Mesajınız", placeholder)
        .required()
        .max_length(500)
        .default_value(default)
}

/// All built-in schemas. Called once at startup by
/// [`SchemaRegistry::built_in`](crate::schema::SchemaRegistry::built_in).
pub fn built_in_schemas() -> Vec<TemplateSchema> {
    vec![
        seni_seviyorum(),
        seni_seviyorum_teen(),
        affet_beni(),
        affet_beni_classic(),
        evlilik_teklifi_elegant(),
        ozur_dilerim_classic(),
        dogum_gunu_fun(),
        tesekkur_adult(),
        mutlu_yillar_fun(),
        cikma_teklifi(),
        yil_donumu(),
        is_tebrigi(),
    ]
}

fn seni_seviyorum() -> TemplateSchema {
    TemplateSchema::new(
        "seni-seviyorum",
        vec![
            recipient_name(),
            main_message(
                "Sevdiklerinize iletmek istediğiniz ana mesajı yazın...",
                "Sen benim hayatımın en güzel parçasısın. Seninle geçirdiğim her an \
                 bir hayal gibi. Seni ne kadar sevdiğimi kelimelerle anlatmak mümkün \
                 değil. Her gün seni daha çok seviyorum.",
            ),
            FieldDescriptor::text("footerMessage", "Alt Mesaj", "Sayfanın altında görünecek kısa mesaj")
                .max_length(100)
                .default_value("Sen benim her şeyimsin!"),
            music_url(),
        ],
    )
}

fn seni_seviyorum_teen() -> TemplateSchema {
    TemplateSchema::new(
        "seni-seviyorum-teen",
        vec![
            recipient_name(),
            main_message(
                "Sevdiklerinize iletmek istediğiniz ana mesajı yazın...",
                "Hey! Sen gerçekten çok özelsin ve seni ne kadar sevdiğimi bilmeni \
                 istiyorum. Seninle geçirdiğim her an harika! Sen benim için çok \
                 değerlisin.",
            ),
            FieldDescriptor::text("footerMessage", "Alt Mesaj", "Sayfanın altında görünecek kısa mesaj")
                .max_length(100)
                .default_value("Sen harikasın!"),
            music_url(),
        ],
    )
}

fn affet_beni_fields() -> Vec<FieldDescriptor> {
    vec![
        recipient_name(),
        FieldDescriptor::text("subtitle", "Alt Başlık", "Başlığın altında görünecek metin")
            .max_length(100)
            .default_value("Affet Beni"),
        main_message(
            "Özür mesajınızı yazın...",
            "Biliyorum ki seni üzdüm ve bunun için çok pişmanım. Yaptığım hatalar \
             için senden özür diliyorum. Sen benim için çok değerlisin ve seni \
             kaybetmek istemiyorum. Lütfen beni affet.",
        ),
        FieldDescriptor::text("footerMessage", "Alt Mesaj", "Sayfanın altında görünecek mesaj")
            .max_length(150)
            .default_value("Seni çok seviyorum ve özür diliyorum!"),
        FieldDescriptor::text("quoteMessage", "Alıntı Mesajı", "En altta görünecek alıntı mesajı")
            .max_length(200)
            .default_value("\"Gerçek aşk, hatalarımızı kabul etmek ve affedilmeyi umut etmektir.\""),
        music_url(),
    ]
}

fn affet_beni() -> TemplateSchema {
    TemplateSchema::new("affet-beni", affet_beni_fields())
}

fn affet_beni_classic() -> TemplateSchema {
    TemplateSchema::new("affet-beni-classic", affet_beni_fields())
}

fn evlilik_teklifi_elegant() -> TemplateSchema {
    TemplateSchema::new(
        "evlilik-teklifi-elegant",
        vec![
            recipient_name(),
            main_message(
                "Evlilik teklifi mesajınızı yazın...",
                "Seninle geçirdiğim her an hayatımın en güzel anları. Artık hayatımın \
                 geri kalanını da seninle geçirmek istiyorum. Benimle evlenir misin?",
            ),
            FieldDescriptor::text("footerMessage", "Alt Mesaj", "Sayfanın altında görünecek mesaj")
                .max_length(150)
                .default_value("Seni sonsuza kadar seviyorum!"),
            FieldDescriptor::textarea("specialMessage", "Özel Mesaj", "Ek bir özel mesaj eklemek isterseniz...")
                .max_length(300)
                .default_value(
                    "Sen benim hayatımın aşkısın, ruhuma dokunduğun ilk günden beri seni seviyorum.",
                ),
            music_url(),
        ],
    )
}

fn ozur_dilerim_classic() -> TemplateSchema {
    TemplateSchema::new(
        "ozur-dilerim-classic",
        vec![
            recipient_name(),
            FieldDescriptor::textarea("mainMessage", "Özür Mesajınız", "Özür mesajınızı yazın...")
                .required()
                .max_length(500)
                .default_value(
                    "Biliyorum ki seni üzdüm ve bunun için çok pişmanım. Yaptığım \
                     hatalar için senden özür diliyorum. Sen benim için çok değerlisin \
                     ve seni kaybetmek istemiyorum. Lütfen beni affet.",
                ),
            music_url(),
        ],
    )
}

fn dogum_gunu_fun() -> TemplateSchema {
    TemplateSchema::new(
        "dogum-gunu-fun",
        vec![
            FieldDescriptor::text(
                "recipientName",
                "Doğum Günü Sahibinin Adı",
                "Doğum günü kutlanacak kişinin adını girin",
            )
            .required()
            .max_length(50),
            FieldDescriptor::text("age", "Yaş", "Kaç yaşına girdiğini yazın (ör: 25)").max_length(3),
            FieldDescriptor::textarea(
                "mainMessage",
                "Doğum Günü Mesajınız",
                "Doğum günü mesajınızı yazın...",
            )
            .required()
            .max_length(500)
            .default_value(
                "Doğum günün kutlu olsun! Bu özel günde sana en güzel dilekleri \
                 gönderiyorum. Yeni yaşın sana sağlık, mutluluk ve başarı getirsin!",
            ),
            FieldDescriptor::text("wishMessage", "Dilek Mesajı", "Özel bir dileğiniz varsa yazın...")
                .max_length(150)
                .default_value("Tüm hayallerin gerçek olsun!"),
            FieldDescriptor::text("footerMessage", "Alt Mesaj", "Sayfanın altında görünecek mesaj")
                .max_length(100)
                .default_value("Nice mutlu yıllara!"),
            music_url(),
        ],
    )
}

fn tesekkur_adult() -> TemplateSchema {
    TemplateSchema::new(
        "tesekkur-adult",
        vec![
            recipient_name(),
            FieldDescriptor::textarea(
                "mainMessage",
                "Teşekkür Mesajınız",
                "Teşekkür mesajınızı yazın...",
            )
            .required()
            .max_length(500)
            .default_value(
                "Hayatımda olduğun için çok şanslıyım. Bana verdiğin destek, sevgi ve \
                 anlayış için sana ne kadar teşekkür etsem az. Sen gerçekten çok \
                 özelsin ve seni ne kadar takdir ettiğimi bilmeni istiyorum.",
            ),
            music_url(),
        ],
    )
}

fn mutlu_yillar_fun() -> TemplateSchema {
    TemplateSchema::new(
        "mutlu-yillar-fun",
        vec![
            recipient_name(),
            FieldDescriptor::textarea(
                "mainMessage",
                "Yeni Yıl Mesajınız",
                "Yeni yıl mesajınızı yazın...",
            )
            .required()
            .max_length(500)
            .default_value(
                "Yeni yılın sana sağlık, mutluluk ve başarı getirmesini diliyorum! \
                 Bu yıl tüm hayallerin gerçek olsun. Mutlu yıllar!",
            ),
            music_url(),
        ],
    )
}

fn cikma_teklifi() -> TemplateSchema {
    TemplateSchema::new(
        "cikma-teklifi",
        vec![
            recipient_name(),
            FieldDescriptor::text("proposalQuestion", "Teklif Sorusu", "Örn: Benimle çıkar mısın?")
                .required()
                .max_length(80)
                .default_value("Benimle çıkar mısın?"),
            main_message(
                "Duygularınızı paylaşmak için özel mesajınız...",
                "Kalbim her gün seninle daha da hızlanıyor. Bu anı birlikte büyülü \
                 kılmak için sana kalbimin en içten sorusunu soruyorum...",
            ),
            FieldDescriptor::text("secondaryMessage", "Ek Mesaj", "Örn: Bu anı sonsuza dek hatırlayalım.")
                .max_length(120)
                .default_value("Bu anı sonsuza dek hatırlayalım."),
            music_url(),
        ],
    )
}

/// Anniversary template. Each style renders a different experience (timeline,
/// memory letter, lock-screen reveal, quiz), so most fields are
/// style-restricted; only the recipient, main message, and music are common.
fn yil_donumu() -> TemplateSchema {
    TemplateSchema::new(
        "yil-donumu",
        vec![
            recipient_name(),
            main_message(
                "Yıl dönümü mesajınızı yazın...",
                "Seninle geçen her yıl, hayatımın en değerli hediyesi. Nice yıllara \
                 birlikte!",
            ),
            music_url(),
            // Modern: scrollable timeline of shared memories.
            FieldDescriptor::text("headlineMessage", "Başlık Mesajı", "Sayfanın en üstündeki başlık")
                .max_length(80)
                .default_value("Mutlu Yıl Dönümü")
                .styles(&[Modern]),
            FieldDescriptor::text("timelineIntro", "Zaman Tüneli Girişi", "Zaman tünelini tanıtan kısa metin")
                .max_length(150)
                .default_value("Birlikte yazdığımız hikayeye bir bak...")
                .styles(&[Modern]),
            FieldDescriptor::textarea(
                "timelineEvents",
                "Zaman Tüneli Anıları",
                "Her satıra bir anı yazın (tarih - açıklama)",
            )
            .max_length(800)
            .styles(&[Modern]),
            FieldDescriptor::text("timelineCta", "Devam Butonu", "Zaman tünelini başlatan buton yazısı")
                .max_length(40)
                .default_value("Anılarımıza Yolculuk")
                .styles(&[Modern]),
            FieldDescriptor::text("timelineClosing", "Kapanış Mesajı", "Zaman tüneli sonunda görünecek mesaj")
                .max_length(150)
                .styles(&[Modern]),
            FieldDescriptor::textarea(
                "timelineFinalMessage",
                "Final Mesajı",
                "Sayfanın sonundaki duygusal mesaj",
            )
            .max_length(300)
            .default_value("İyi ki varsın, iyi ki birlikteyiz.")
            .styles(&[Modern]),
            // Classic: memory letter with photo backdrop.
            FieldDescriptor::text("hatiraHeadline", "Hatıra Başlığı", "Hatıra sayfasının başlığı")
                .max_length(80)
                .default_value("Hatıralarımız")
                .styles(&[Classic]),
            FieldDescriptor::text("hatiraSubtitle", "Hatıra Alt Başlığı", "Başlığın altındaki kısa metin")
                .max_length(120)
                .styles(&[Classic]),
            FieldDescriptor::textarea("hatiraLetter", "Hatıra Mektubu", "Sevdiğinize yazdığınız mektup")
                .max_length(800)
                .styles(&[Classic]),
            FieldDescriptor::textarea("hatiraMemories", "Anı Listesi", "Her satıra bir anı yazın")
                .max_length(600)
                .styles(&[Classic]),
            FieldDescriptor::text("hatiraBackgroundUrl", "Arka Plan Fotoğrafı", "Fotoğraf bağlantısı (isteğe bağlı)")
                .max_length(300)
                .styles(&[Classic]),
            FieldDescriptor::text("hatiraButtonLabel", "Mektup Butonu", "Mektubu açan buton yazısı")
                .max_length(40)
                .default_value("Mektubu Aç")
                .styles(&[Classic]),
            // Minimalist: locked message reveal.
            FieldDescriptor::text("minimalistTitle", "Başlık", "Sade başlık")
                .max_length(80)
                .default_value("Yıl Dönümümüz")
                .styles(&[Minimalist]),
            FieldDescriptor::text("minimalistSubtitle", "Alt Başlık", "Başlığın altındaki metin")
                .max_length(120)
                .styles(&[Minimalist]),
            FieldDescriptor::text("minimalistLockMessage", "Kilit Mesajı", "Mesaj açılmadan önce görünen yazı")
                .max_length(120)
                .default_value("Senin için bir mesajım var...")
                .styles(&[Minimalist]),
            FieldDescriptor::textarea(
                "minimalistRevealMessage",
                "Açılan Mesaj",
                "Kilit açıldığında görünecek mesaj",
            )
            .max_length(500)
            .styles(&[Minimalist]),
            FieldDescriptor::textarea("minimalistHighlights", "Öne Çıkanlar", "Her satıra bir özel an yazın")
                .max_length(400)
                .styles(&[Minimalist]),
            FieldDescriptor::text("minimalistFooter", "Alt Mesaj", "Sayfanın altındaki kısa mesaj")
                .max_length(100)
                .styles(&[Minimalist]),
            // Eglenceli: anniversary quiz.
            FieldDescriptor::text("quizHeadline", "Quiz Başlığı", "Quiz sayfasının başlığı")
                .max_length(80)
                .default_value("Bizi Ne Kadar Hatırlıyorsun?")
                .styles(&[Eglenceli]),
            FieldDescriptor::text("quizIntro", "Quiz Girişi", "Quizi tanıtan kısa metin")
                .max_length(150)
                .styles(&[Eglenceli]),
            FieldDescriptor::text("quizButtonLabel", "Başlat Butonu", "Quizi başlatan buton yazısı")
                .max_length(40)
                .default_value("Başla")
                .styles(&[Eglenceli]),
            FieldDescriptor::textarea(
                "quizItems",
                "Quiz Soruları",
                "Her satıra bir soru ve cevabı yazın (soru | cevap)",
            )
            .max_length(800)
            .styles(&[Eglenceli]),
            FieldDescriptor::text("quizHintLabel", "İpucu Etiketi", "İpucu butonunun yazısı")
                .max_length(40)
                .default_value("İpucu")
                .styles(&[Eglenceli]),
            FieldDescriptor::text("quizCompletionTitle", "Bitiş Başlığı", "Quiz bitince görünen başlık")
                .max_length(80)
                .default_value("Tebrikler!")
                .styles(&[Eglenceli]),
            FieldDescriptor::textarea(
                "quizCompletionMessage",
                "Bitiş Mesajı",
                "Quiz bitince görünen mesaj",
            )
            .max_length(300)
            .styles(&[Eglenceli]),
            FieldDescriptor::textarea("quizFinalMessage", "Final Mesajı", "Sayfanın sonundaki mesaj")
                .max_length(300)
                .styles(&[Eglenceli]),
            FieldDescriptor::text("quizReplay", "Tekrar Butonu", "Quizi yeniden başlatan buton yazısı")
                .max_length(40)
                .default_value("Tekrar Oyna")
                .styles(&[Eglenceli]),
        ],
    )
}

/// Job congratulations template. Shares the recipient, message, position,
/// company, and music fields across styles; each style adds its own layout
/// fields (highlight cards, certificate, minimal note, celebration).
fn is_tebrigi() -> TemplateSchema {
    TemplateSchema::new(
        "is-tebrigi",
        vec![
            recipient_name(),
            main_message(
                "Tebrik mesajınızı yazın...",
                "Yeni işin hayırlı olsun! Emeklerinin karşılığını almanı izlemek \
                 harika. Bu yeni yolculukta başarılar diliyorum.",
            ),
            FieldDescriptor::text("newPosition", "Yeni Pozisyon", "Örn: Kıdemli Yazılım Mühendisi")
                .required()
                .max_length(80),
            FieldDescriptor::text("companyName", "Şirket Adı", "Yeni şirketin adı")
                .max_length(80),
            music_url(),
            // Modern: highlight cards with call-to-action.
            FieldDescriptor::text("highlightMessage", "Öne Çıkan Mesaj", "Kartların üstündeki mesaj")
                .max_length(150)
                .styles(&[Modern]),
            FieldDescriptor::text("highlightOne", "Birinci Kart", "İlk öne çıkan özellik")
                .max_length(100)
                .styles(&[Modern]),
            FieldDescriptor::text("highlightTwo", "İkinci Kart", "İkinci öne çıkan özellik")
                .max_length(100)
                .styles(&[Modern]),
            FieldDescriptor::text("ctaLabel", "Buton Yazısı", "Ana butonun yazısı")
                .max_length(40)
                .default_value("Kutlamaya Katıl")
                .styles(&[Modern]),
            FieldDescriptor::text("ctaUrl", "Buton Bağlantısı", "Butonun açacağı bağlantı")
                .max_length(200)
                .styles(&[Modern]),
            FieldDescriptor::text("secondaryCtaLabel", "İkincil Buton", "İkincil butonun yazısı")
                .max_length(40)
                .styles(&[Modern]),
            // Classic: framed certificate.
            FieldDescriptor::text("certificateTitle", "Sertifika Başlığı", "Sertifikanın başlığı")
                .max_length(80)
                .default_value("Tebrik Belgesi")
                .styles(&[Classic]),
            FieldDescriptor::text("certificateSubtitle", "Sertifika Alt Başlığı", "Başlığın altındaki metin")
                .max_length(120)
                .styles(&[Classic]),
            FieldDescriptor::text("footerMessage", "Alt Mesaj", "Sertifikanın altındaki mesaj")
                .max_length(150)
                .default_value("Nice başarılara!")
                .styles(&[Classic]),
            FieldDescriptor::text("downloadLabel", "İndirme Butonu", "İndirme butonunun yazısı")
                .max_length(40)
                .default_value("Belgeyi İndir")
                .styles(&[Classic]),
            // Minimalist: short congratulation note.
            FieldDescriptor::text("minimalTitle", "Başlık", "Sade başlık")
                .max_length(80)
                .default_value("Tebrikler")
                .styles(&[Minimalist]),
            FieldDescriptor::textarea("supplementMessage", "Ek Mesaj", "Ana mesajı tamamlayan kısa not")
                .max_length(300)
                .styles(&[Minimalist]),
            FieldDescriptor::text("messageButtonLabel", "Mesaj Butonu", "Mesajı açan butonun yazısı")
                .max_length(40)
                .styles(&[Minimalist]),
            FieldDescriptor::text("messageButtonUrl", "Buton Bağlantısı", "Butonun açacağı bağlantı")
                .max_length(200)
                .styles(&[Minimalist]),
            FieldDescriptor::text("startDate", "Başlangıç Tarihi", "İşe başlama tarihi")
                .max_length(40)
                .styles(&[Minimalist]),
            // Eglenceli: confetti celebration.
            FieldDescriptor::text("headline", "Kutlama Başlığı", "Kutlama sayfasının başlığı")
                .max_length(80)
                .default_value("Yeni İşin Kutlu Olsun!")
                .styles(&[Eglenceli]),
            FieldDescriptor::text("subHeadline", "Alt Başlık", "Başlığın altındaki metin")
                .max_length(120)
                .styles(&[Eglenceli]),
            FieldDescriptor::text("celebrationButtonLabel", "Kutlama Butonu", "Konfeti butonunun yazısı")
                .max_length(40)
                .default_value("Kutla!")
                .styles(&[Eglenceli]),
            FieldDescriptor::text("teamName", "Takım Adı", "Yeni takımın veya departmanın adı")
                .max_length(80)
                .styles(&[Eglenceli]),
            FieldDescriptor::text("secondaryMessage", "Ek Mesaj", "Kutlamanın altındaki kısa mesaj")
                .max_length(120)
                .styles(&[Eglenceli]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DesignStyle, SchemaRegistry};
    use std::collections::HashSet;

    #[test]
    fn catalog_slugs_are_unique() {
        let schemas = built_in_schemas();
        let slugs: HashSet<&str> = schemas.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs.len(), schemas.len());
    }

    #[test]
    fn every_schema_has_recipient_and_main_message() {
        for schema in built_in_schemas() {
            assert!(schema.field("recipientName").is_some(), "{}", schema.slug);
            assert!(schema.field("mainMessage").is_some(), "{}", schema.slug);
        }
    }

    #[test]
    fn defaults_only_cover_schema_keys() {
        let registry = SchemaRegistry::built_in();
        for slug in registry.slugs() {
            let schema = registry.get(slug).unwrap();
            for key in registry.default_text_fields(slug).keys() {
                assert!(schema.field(key).is_some(), "{slug}: stray default {key}");
            }
        }
    }

    #[test]
    fn seni_seviyorum_defaults_are_deterministic() {
        let registry = SchemaRegistry::built_in();
        let defaults = registry.default_text_fields("seni-seviyorum");
        assert!(defaults["mainMessage"].starts_with("Sen benim hayatımın"));
        assert_eq!(defaults["footerMessage"], "Sen benim her şeyimsin!");
        assert!(!defaults.contains_key("musicUrl"));
    }

    #[test]
    fn yil_donumu_style_switch_changes_visible_set() {
        let registry = SchemaRegistry::built_in();
        let schema = registry.get("yil-donumu").unwrap();

        let keys = |style: DesignStyle| -> Vec<&str> {
            schema
                .visible_fields(style)
                .iter()
                .map(|f| f.key.as_str())
                .collect()
        };

        assert_eq!(
            keys(DesignStyle::Modern),
            vec![
                "recipientName",
                "mainMessage",
                "musicUrl",
                "headlineMessage",
                "timelineIntro",
                "timelineEvents",
                "timelineCta",
                "timelineClosing",
                "timelineFinalMessage",
            ]
        );

        assert_eq!(
            keys(DesignStyle::Eglenceli),
            vec![
                "recipientName",
                "mainMessage",
                "musicUrl",
                "quizHeadline",
                "quizIntro",
                "quizButtonLabel",
                "quizItems",
                "quizHintLabel",
                "quizCompletionTitle",
                "quizCompletionMessage",
                "quizFinalMessage",
                "quizReplay",
            ]
        );
    }

    #[test]
    fn is_tebrigi_common_fields_visible_in_every_style() {
        let registry = SchemaRegistry::built_in();
        let schema = registry.get("is-tebrigi").unwrap();
        for style in DesignStyle::ALL {
            let keys: Vec<&str> = schema
                .visible_fields(style)
                .iter()
                .map(|f| f.key.as_str())
                .collect();
            for common in ["recipientName", "mainMessage", "newPosition", "companyName", "musicUrl"] {
                assert!(keys.contains(&common), "{:?} missing {common}", style);
            }
        }
    }
}
