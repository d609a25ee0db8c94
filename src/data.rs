//! Static display records rendered by the landing page sections.
//!
//! Everything here is fixed content: defined once, never mutated, identified
//! only by its position in the slice.

pub struct Statistic {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
    /// Trailing unit rendered after the counter, e.g. "件". Empty when the
    /// suffix already carries the unit.
    pub unit: &'static str,
}

pub struct ServiceOffering {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
}

pub struct AttorneyProfile {
    pub name: &'static str,
    pub name_en: &'static str,
    pub title: &'static str,
    pub bar: &'static str,
    pub registered: &'static str,
    pub specialty: &'static str,
    pub education: &'static str,
    pub awards: &'static [&'static str],
    pub bio: &'static str,
}

pub struct CaseResult {
    pub category: &'static str,
    pub title: &'static str,
    /// Monetary or scope descriptor; `None` for cases with nothing to show.
    pub amount: Option<&'static str>,
    pub description: &'static str,
    pub outcome: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub initials: &'static str,
    pub detail: &'static str,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static STATISTICS: &[Statistic] = &[
    Statistic { value: 3200, suffix: "+", label: "解決実績", unit: "件" },
    Statistic { value: 25, suffix: "年", label: "創業からの年数", unit: "" },
    Statistic { value: 98, suffix: "%", label: "依頼者満足度", unit: "" },
    Statistic { value: 12, suffix: "名", label: "在籍弁護士", unit: "" },
];

pub static SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        icon: "🏢",
        title: "企業法務",
        description: "契約書の作成・審査、M&A、コンプライアンス体制の構築など、企業活動全般にわたる法的サポートを提供します。",
        items: &["契約書作成・審査", "M&A・事業承継", "コンプライアンス", "労働問題対応"],
    },
    ServiceOffering {
        icon: "⚖️",
        title: "民事訴訟・紛争解決",
        description: "不動産トラブル、金銭トラブル、離婚・相続など、あらゆる民事紛争において最善の解決策を追求します。",
        items: &["不動産紛争", "金銭・債権回収", "離婚・親権", "相続・遺産分割"],
    },
    ServiceOffering {
        icon: "🛡️",
        title: "刑事弁護",
        description: "逮捕・勾留から裁判まで、刑事手続きの各段階において迅速かつ的確な弁護活動を行います。",
        items: &["逮捕・勾留対応", "示談交渉", "公判弁護", "再審請求"],
    },
    ServiceOffering {
        icon: "🏠",
        title: "不動産・相続",
        description: "不動産取引の法的サポートから相続手続きまで、財産に関わる問題を総合的に解決します。",
        items: &["不動産売買", "遺言書作成", "相続手続き", "成年後見"],
    },
    ServiceOffering {
        icon: "👥",
        title: "労働問題",
        description: "不当解雇、残業代未払い、ハラスメントなど、労働に関するあらゆる問題に対応します。",
        items: &["不当解雇対応", "残業代請求", "ハラスメント", "労働審判"],
    },
    ServiceOffering {
        icon: "📚",
        title: "知的財産",
        description: "特許・商標・著作権などの知的財産権の保護と活用に関する法的アドバイスを提供します。",
        items: &["特許・商標登録", "著作権保護", "不正競争防止", "ライセンス交渉"],
    },
];

pub static ATTORNEYS: &[AttorneyProfile] = &[
    AttorneyProfile {
        name: "山田 健一郎",
        name_en: "Kenichiro Yamada",
        title: "代表弁護士 / 所長",
        bar: "東京弁護士会",
        registered: "1998年登録",
        specialty: "企業法務・M&A・国際取引",
        education: "東京大学法学部卒 / 東京大学法科大学院修了",
        awards: &["法務省表彰 (2015)", "東京弁護士会優秀弁護士賞 (2019)"],
        bio: "企業法務を専門とし、国内外のM&Aや大型契約交渉を数多く手がける。上場企業の社外取締役も務める。",
    },
    AttorneyProfile {
        name: "鈴木 美咲",
        name_en: "Misaki Suzuki",
        title: "パートナー弁護士",
        bar: "東京弁護士会",
        registered: "2003年登録",
        specialty: "家事事件・相続・労働問題",
        education: "慶應義塾大学法学部卒 / 慶應義塾大学法科大学院修了",
        awards: &["日弁連女性弁護士奨励賞 (2018)"],
        bio: "離婚・相続・労働問題を専門とし、依頼者に寄り添った丁寧な対応で高い評価を得ている。",
    },
    AttorneyProfile {
        name: "田中 誠司",
        name_en: "Seiji Tanaka",
        title: "アソシエイト弁護士",
        bar: "東京弁護士会",
        registered: "2012年登録",
        specialty: "刑事弁護・民事訴訟",
        education: "早稲田大学法学部卒 / 早稲田大学法科大学院修了",
        awards: &["司法試験優秀賞"],
        bio: "刑事弁護と民事訴訟を専門とし、複雑な案件においても粘り強い弁護活動で依頼者の権利を守る。",
    },
];

pub static CASE_RESULTS: &[CaseResult] = &[
    CaseResult {
        category: "企業法務",
        title: "大手製造業のM&A案件",
        amount: Some("約50億円規模"),
        description: "複数の子会社を含む大型M&Aにおいて、デューデリジェンスから契約交渉、クロージングまで一貫してサポート。スムーズな事業統合を実現。",
        outcome: "成約",
    },
    CaseResult {
        category: "労働問題",
        title: "不当解雇による損害賠償請求",
        amount: Some("解決金 1,200万円"),
        description: "突然の解雇通告を受けた依頼者の代理人として交渉。会社側の違法性を立証し、依頼者の希望する条件での和解を実現した。",
        outcome: "和解成立",
    },
    CaseResult {
        category: "相続",
        title: "遺産分割調停・審判",
        amount: Some("遺産総額 3億円超"),
        description: "複数の相続人間で争われた遺産分割問題。綿密な財産調査と交渉により、依頼者に有利な形での調停成立を実現。",
        outcome: "調停成立",
    },
    CaseResult {
        category: "刑事弁護",
        title: "詐欺被疑事件の弁護",
        amount: None,
        description: "複雑な事実関係が絡む詐欺被疑事件において、証拠の精査と被害者との示談交渉を通じ、起訴猶予処分を獲得した。",
        outcome: "不起訴",
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "離婚問題で途方に暮れていた時に相談しました。鈴木先生は私の話を丁寧に聞いてくださり、複雑な財産分与の問題も納得のいく形で解決していただきました。",
        initials: "T.M. 様",
        detail: "40代 / 離婚・財産分与",
    },
    Testimonial {
        quote: "会社設立から契約書の整備まで、山田先生には創業期から一貫してサポートいただいています。法律の専門家がいてくれる安心感は何物にも代えがたいです。",
        initials: "K.S. 様",
        detail: "50代 / 企業法務",
    },
    Testimonial {
        quote: "突然の逮捕で家族が混乱する中、田中先生が迅速に対応してくださいました。不起訴という結果に、家族全員で先生に感謝しています。",
        initials: "A.N. 様",
        detail: "30代 / 刑事弁護",
    },
];

pub static FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "初回相談は本当に無料ですか？",
        answer: "はい、初回のご相談は60分まで無料で承っております。お気軽にご連絡ください。なお、2回目以降のご相談は1時間あたり22,000円（税込）となります。",
    },
    FaqEntry {
        question: "相談から依頼までの流れを教えてください。",
        answer: "①お電話またはメールでご予約 → ②初回無料相談（対面またはオンライン） → ③費用・方針のご説明 → ④委任契約の締結 → ⑤案件対応開始、という流れになります。",
    },
    FaqEntry {
        question: "弁護士費用はどのくらいかかりますか？",
        answer: "案件の種類や複雑さによって異なります。着手金・報酬金制の場合、着手金は10〜50万円程度、報酬金は経済的利益の10〜15%程度が目安です。初回相談時に詳しくご説明いたします。",
    },
    FaqEntry {
        question: "オンライン相談は可能ですか？",
        answer: "はい、ZoomやGoogle Meetを使ったオンライン相談に対応しております。全国どこからでもご相談いただけます。",
    },
    FaqEntry {
        question: "夜間・休日の相談は可能ですか？",
        answer: "緊急案件（逮捕・勾留など）については24時間対応しております。通常の相談については、事前にご予約いただければ平日夜間（20時まで）および土曜日（要予約）にも対応可能です。",
    },
    FaqEntry {
        question: "相談内容は秘密にしてもらえますか？",
        answer: "弁護士には法律上の守秘義務があります。ご相談内容が外部に漏れることは一切ありません。安心してご相談ください。",
    },
];

/// Consultation categories offered by the contact form select,
/// as `(value, label)` pairs.
pub static CONSULTATION_CATEGORIES: &[(&str, &str)] = &[
    ("corporate", "企業法務"),
    ("civil", "民事訴訟・紛争解決"),
    ("criminal", "刑事弁護"),
    ("real-estate", "不動産・相続"),
    ("labor", "労働問題"),
    ("ip", "知的財産"),
    ("other", "その他"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_sizes_match_page_layout() {
        assert_eq!(STATISTICS.len(), 4);
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(ATTORNEYS.len(), 3);
        assert_eq!(CASE_RESULTS.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(FAQ_ENTRIES.len(), 6);
    }

    #[test]
    fn every_service_has_sub_items() {
        for service in SERVICES {
            assert!(!service.title.is_empty());
            assert_eq!(service.items.len(), 4);
        }
    }

    #[test]
    fn attorneys_carry_at_least_one_award() {
        for attorney in ATTORNEYS {
            assert!(!attorney.awards.is_empty());
            assert!(!attorney.bio.is_empty());
        }
    }

    #[test]
    fn only_the_criminal_case_has_no_amount() {
        let missing: Vec<_> = CASE_RESULTS
            .iter()
            .filter(|case| case.amount.is_none())
            .map(|case| case.category)
            .collect();
        assert_eq!(missing, vec!["刑事弁護"]);
    }

    #[test]
    fn faq_entries_are_complete() {
        for entry in FAQ_ENTRIES {
            assert!(!entry.question.is_empty());
            assert!(!entry.answer.is_empty());
        }
    }
}
