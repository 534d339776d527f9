//! Built-in intent catalog
//!
//! Keywords cover both the Chinese phrasing players use in-game and English
//! equivalents. Order matters: intents are listed by priority and the subject
//! gazetteer is scanned front to back.

use crate::config::IntentPatternSpec;

/// Default intents in priority order
///
/// Chinese keywords match as substrings since the script has no word breaks.
/// English words are regex rules bounded by `\b` so that e.g. "preview" does
/// not read as "review". `BP`, `buff` and `counter` stay plain keywords: players
/// write them glued to Chinese text ("红buff", "counter位").
pub fn default_intents() -> Vec<IntentPatternSpec> {
    vec![
        IntentPatternSpec::keywords("equipment", &["出装", "装备", "买什么", "推荐装备", "装备推荐"])
            .with_regex(r"\b(builds?|equip\w*|items?|what to buy)\b"),
        IntentPatternSpec::keywords("inscription", &["铭文", "符文", "搭配", "铭文推荐"])
            .with_regex(r"\b(inscriptions?|runes?|arcana)\b"),
        IntentPatternSpec::keywords("bp_suggestion", &["BP", "禁选", "counter", "阵容", "选英雄"])
            .with_regex(r"\b(ban|pick)s?\b")
            .with_regex(r"\b(drafts?|lineups?|team comps?)\b"),
        IntentPatternSpec::keywords("match_analysis", &["复盘", "分析", "对局", "刚才", "怎么打"])
            .with_regex(r"\b(review|analy\w*|replay|last game)\b"),
        IntentPatternSpec::keywords("monster_timer", &["计时", "buff", "野怪", "暴君", "龙"])
            .with_regex(r"\b(timers?|jungle camps?|tyrant|overlord|respawns?)\b"),
        IntentPatternSpec::keywords("entertainment", &["语音", "梗", "好玩", "搞笑", "趣味"])
            .with_regex(r"\b(voice lines?|memes?|funny|jokes?|trivia)\b"),
    ]
}

/// Default subject gazetteer
pub fn default_subject_names() -> Vec<String> {
    [
        // Marksmen
        "鲁班七号", "后羿", "马可波罗", "公孙离", "孙尚香", "虞姬", "百里守约", "伽罗",
        // Mages
        "安琪拉", "王昭君", "甄姬", "貂蝉",
        // Tanks and fighters
        "亚瑟", "程咬金", "典韦", "夏侯惇", "张飞",
        // Supports
        "蔡文姬", "瑶",
        // Assassins
        "李白", "韩信", "孙悟空",
        "庄周",
        // English names, same roster order
        "Luban No.7", "Hou Yi", "Marco Polo", "Gongsun Li", "Sun Shangxiang", "Yu Ji",
        "Baili Shouyue", "Garo", "Angela", "Wang Zhaojun", "Zhen Ji", "Diaochan",
        "Arthur", "Cheng Yaojin", "Dian Wei", "Xiahou Dun", "Zhang Fei",
        "Cai Wenji", "Yao",
        "Li Bai", "Han Xin", "Sun Wukong",
        "Zhuangzi",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Default tier gazetteer
pub fn default_tiers() -> Vec<String> {
    [
        "青铜", "白银", "黄金", "铂金", "钻石", "星耀", "王者", "荣耀王者",
        "Bronze", "Silver", "Gold", "Platinum", "Diamond", "Starlight", "Master", "Grandmaster",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Keywords that mark an explicit request
pub fn default_explicit_request_keywords() -> Vec<String> {
    ["推荐", "怎么", "recommend", "how to", "how should", "how do"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Keywords that ask for a detailed answer
pub fn default_detail_request_keywords() -> Vec<String> {
    ["详细", "具体", "detailed", "specific", "in detail"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
