//! Built-in key grids, one per [`Mode`](super::Mode), in registry order.
//!
//! Rows shorter than the grid are padded with empty cells. The page-flip and
//! confirm keys always sit at columns 6 and 8 of the last row, with empty
//! filler cells at 7 and 9.

use super::layout::{Layout, Mode, DONE, NEXT_PAGE, SPACE};

pub static BUILTIN_LAYOUTS: [Layout; Mode::COUNT] = [
    // Hiragana
    Layout::new(
        "<かな>",
        [
            ["あ", "い", "う", "え", "お", "が", "ぎ", "ぐ", "げ", "ご"],
            ["か", "き", "く", "け", "こ", "ざ", "じ", "ず", "ぜ", "ぞ"],
            ["さ", "し", "す", "せ", "そ", "だ", "ぢ", "づ", "で", "ど"],
            ["た", "ち", "つ", "て", "と", "ば", "び", "ぶ", "べ", "ぼ"],
            ["な", "に", "ぬ", "ね", "の", "ぱ", "ぴ", "ぷ", "ぺ", "ぽ"],
            ["は", "ひ", "ふ", "へ", "ほ", "ぁ", "ぃ", "ぅ", "ぇ", "ぉ"],
            ["ま", "み", "む", "め", "も", "っ", "ゃ", "ゅ", "ょ", "ゎ"],
            ["や", "ゆ", "よ", "わ", "ん", "ー", "～", "・", "＝", "☆"],
            ["ら", "り", "る", "れ", "ろ", "ヴ", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // Katakana
    Layout::new(
        "<カナ>",
        [
            ["ア", "イ", "ウ", "エ", "オ", "ガ", "ギ", "グ", "ゲ", "ゴ"],
            ["カ", "キ", "ク", "ケ", "コ", "ザ", "ジ", "ズ", "ゼ", "ゾ"],
            ["サ", "シ", "ス", "セ", "ソ", "ダ", "ヂ", "ヅ", "デ", "ド"],
            ["タ", "チ", "ツ", "テ", "ト", "バ", "ビ", "ブ", "ベ", "ボ"],
            ["ナ", "ニ", "ヌ", "ネ", "ノ", "パ", "ピ", "プ", "ペ", "ポ"],
            ["ハ", "ヒ", "フ", "ヘ", "ホ", "ァ", "ィ", "ゥ", "ェ", "ォ"],
            ["マ", "ミ", "ム", "メ", "モ", "ッ", "ャ", "ュ", "ョ", "ヮ"],
            ["ヤ", "ユ", "ヨ", "ワ", "ン", "ー", "～", "・", "＝", "☆"],
            ["ラ", "リ", "ル", "レ", "ロ", "ヴ", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // ZhHiragana (ー ～ ・ ＝ replaced by - ~ ■ =)
    Layout::new(
        "<平假>",
        [
            ["あ", "い", "う", "え", "お", "が", "ぎ", "ぐ", "げ", "ご"],
            ["か", "き", "く", "け", "こ", "ざ", "じ", "ず", "ぜ", "ぞ"],
            ["さ", "し", "す", "せ", "そ", "だ", "ぢ", "づ", "で", "ど"],
            ["た", "ち", "つ", "て", "と", "ば", "び", "ぶ", "べ", "ぼ"],
            ["な", "に", "ぬ", "ね", "の", "ぱ", "ぴ", "ぷ", "ぺ", "ぽ"],
            ["は", "ひ", "ふ", "へ", "ほ", "ぁ", "ぃ", "ぅ", "ぇ", "ぉ"],
            ["ま", "み", "む", "め", "も", "っ", "ゃ", "ゅ", "ょ", "ゎ"],
            ["や", "ゆ", "よ", "わ", "ん", "-", "~", "■", "=", "☆"],
            ["ら", "り", "る", "れ", "ろ", "ヴ", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // ZhKatakana (ー ～ ・ ＝ replaced by - ~ ■ =)
    Layout::new(
        "<片假>",
        [
            ["ア", "イ", "ウ", "エ", "オ", "ガ", "ギ", "グ", "ゲ", "ゴ"],
            ["カ", "キ", "ク", "ケ", "コ", "ザ", "ジ", "ズ", "ゼ", "ゾ"],
            ["サ", "シ", "ス", "セ", "ソ", "ダ", "ヂ", "ヅ", "デ", "ド"],
            ["タ", "チ", "ツ", "テ", "ト", "バ", "ビ", "ブ", "ベ", "ボ"],
            ["ナ", "ニ", "ヌ", "ネ", "ノ", "パ", "ピ", "プ", "ペ", "ポ"],
            ["ハ", "ヒ", "フ", "ヘ", "ホ", "ァ", "ィ", "ゥ", "ェ", "ォ"],
            ["マ", "ミ", "ム", "メ", "モ", "ッ", "ャ", "ュ", "ョ", "ヮ"],
            ["ヤ", "ユ", "ヨ", "ワ", "ン", "-", "~", "■", "=", "☆"],
            ["ラ", "リ", "ル", "レ", "ロ", "ヴ", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // Hangul1
    Layout::new(
        "<앞P>",
        [
            ["가", "갸", "거", "겨", "고", "교", "구", "계", "그", "기"],
            ["나", "냐", "너", "녀", "노", "뇨", "누", "뉴", "느", "녹"],
            ["다", "댜", "더", "뎌", "도", "됴", "두", "듀", "드", "디"],
            ["라", "랴", "러", "려", "로", "료", "루", "류", "르", "리"],
            ["마", "먀", "머", "며", "모", "묘", "무", "물", "므", "미"],
            ["바", "뱌", "버", "벼", "보", "뵤", "부", "뷰", "비", "밤"],
            ["사", "색", "서", "세", "소", "쇼", "수", "슈", "신", "심"],
            ["아", "야", "어", "여", "오", "요", "우", "유", "으", "이"],
            ["〜", "·", ".", "☆", SPACE, "", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // Hangul2
    Layout::new(
        "<뒤P>",
        [
            ["자", "쟈", "저", "져", "조", "죠", "주", "쥬", "즈", "지"],
            ["차", "챠", "처", "쳐", "초", "쵸", "추", "츄", "츠", "치"],
            ["카", "캬", "커", "켜", "코", "쿄", "쿠", "큐", "크", "키"],
            ["타", "탸", "터", "텨", "토", "툐", "투", "튜", "트", "티"],
            ["파", "퍄", "퍼", "펴", "포", "표", "푸", "퓨", "프", "피"],
            ["하", "햐", "허", "혀", "호", "효", "후", "휴", "흐", "해"],
            ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"],
            ["진", "녘", "의", "민", "예", "건", "현", "운", "걔", "임"],
            ["영", "은", "성", "준", SPACE, "", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // ZhCn1
    Layout::new(
        "<翻页>",
        [
            ["阿", "艾", "安", "奥", "巴", "拜", "班", "邦", "贝", "本"],
            ["比", "宾", "波", "伯", "布", "查", "达", "丹", "当", "道"],
            ["德", "登", "迪", "蒂", "丁", "度", "杜", "顿", "多", "厄"],
            ["尔", "恩", "法", "凡", "菲", "费", "芬", "佛", "弗", "夫"],
            ["盖", "格", "戈", "冈", "古", "哈", "海", "汉", "豪", "赫"],
            ["华", "霍", "基", "吉", "加", "杰", "捷", "金", "卡", "凯"],
            ["科", "克", "肯", "拉", "莱", "兰", "朗", "劳", "勒", "雷"],
            ["里", "利", "立", "丽", "莉", "林", "琳", "留", "隆", "鲁"],
            ["路", "伦", "罗", "洛", "律", "", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // ZhCn2
    Layout::new(
        "<前页>",
        [
            ["玛", "迈", "曼", "梅", "美", "门", "米", "密", "明", "缪"],
            ["摩", "莫", "姆", "穆", "那", "娜", "纳", "奈", "南", "尼"],
            ["宁", "纽", "奴", "诺", "欧", "帕", "派", "佩", "皮", "普"],
            ["奇", "琪", "琼", "丘", "萨", "撒", "赛", "桑", "瑟", "森"],
            ["沙", "山", "珊", "史", "世", "斯", "丝", "司", "苏", "所"],
            ["索", "塔", "泰", "坦", "汤", "特", "提", "汀", "统", "瓦"],
            ["威", "维", "韦", "卫", "温", "沃", "乌", "西", "希", "夏"],
            ["辛", "修", "休", "雅", "亚", "林", "琳", "留", "隆", "鲁"],
            ["伊", "英", "尤", "则", "扎", "", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // ZhCnAltA1
    Layout::new(
        "<翻页>",
        [
            ["泉", "声", "咽", "危", "石", "日", "色", "冷", "青", "松"],
            ["薄", "暮", "空", "潭", "曲", "安", "禅", "制", "毒", "龙"],
            ["海", "内", "存", "知", "己", "天", "涯", "若", "比", "邻"],
            ["燕", "草", "如", "碧", "丝", "秦", "桑", "低", "绿", "枝"],
            ["当", "君", "怀", "归", "日", "是", "妾", "断", "肠", "时"],
            ["当", "路", "谁", "相", "假", "知", "音", "世", "所", "稀"],
            ["只", "应", "守", "寂", "寞", "还", "掩", "故", "园", "扉"],
            ["坐", "观", "垂", "钓", "者", "－", "～", "·", "＝", "☆"],
            ["徒", "有", "羡", "鱼", "情", "的", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // ZhCnAltA2
    Layout::new(
        "<翻页>",
        [
            ["几", "行", "归", "塞", "尽", "念", "尔", "独", "何", "之"],
            ["暮", "雨", "相", "呼", "失", "寒", "塘", "欲", "下", "迟"],
            ["霞", "光", "连", "碧", "彩", "湖", "岸", "水", "连", "滩"],
            ["天", "地", "丹", "青", "绘", "人", "间", "锦", "绣", "看"],
            ["返", "景", "入", "深", "林", "复", "照", "青", "苔", "上"],
            ["中", "岁", "颇", "好", "道", "晚", "家", "南", "山", "陲"],
            ["兴", "来", "每", "独", "往", "胜", "事", "空", "自", "知"],
            ["遥", "夜", "泛", "清", "瑟", "－", "～", "·", "＝", "☆"],
            ["瑟", "风", "生", "翠", "萝", "的", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // ZhCnAltB1
    Layout::new(
        "<翻页>",
        [
            ["阿", "伊", "乌", "俄", "欧", "安", "英", "奥", "恩", "翁"],
            ["卡", "奇", "库", "克", "寇", "加", "吉", "古", "格", "果"],
            ["萨", "斯", "苏", "瑟", "索", "扎", "兹", "祖", "泽", "佐"],
            ["塔", "提", "图", "特", "托", "达", "迪", "杜", "德", "多"],
            ["纳", "尼", "努", "奈", "诺", "哈", "希", "胡", "赫", "霍"],
            ["法", "菲", "福", "芬", "佛", "巴", "比", "布", "贝", "波"],
            ["马", "米", "穆", "梅", "莫", "帕", "皮", "普", "培", "坡"],
            ["亚", "约", "云", "耶", "尤", "瓦", "维", "温", "尔", "沃"],
            ["拉", "利", "鲁", "勒", "罗", "·", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // ZhCnAltB2
    Layout::new(
        "<翻页>",
        [
            ["Ａ", "Ｂ", "Ｃ", "Ｄ", "Ｅ", "Ｆ", "Ｇ", "Ｈ", "Ｉ", "Ｊ"],
            ["Ｋ", "Ｌ", "Ｍ", "Ｎ", "Ｏ", "Ｐ", "Ｑ", "Ｒ", "Ｓ", "Ｔ"],
            ["Ｕ", "Ｖ", "Ｗ", "Ｘ", "Ｙ", "Ｚ", "ａ", "ｂ", "ｃ", "ｄ"],
            ["ｅ", "ｆ", "ｇ", "ｈ", "ｉ", "ｊ", "ｋ", "ｌ", "ｍ", "ｎ"],
            ["ｏ", "ｐ", "ｑ", "ｒ", "ｓ", "ｔ", "ｕ", "ｖ", "ｗ", "ｘ"],
            ["ｙ", "ｚ", "艾", "莉", "酱", "芭", "蒂", "蕾", "莲", "萝"],
            ["芙", "莎", "琴", "妮", "娅", "娃", "娜", "黛", "丝", "御"],
            ["美", "兰", "玛", "琳", "珊", "瓦", "维", "温", "尔", "沃"],
            ["珍", "坂", "朵", "露", "琪", "·", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // ZhCnAltC1
    Layout::new(
        "<翻页>",
        [
            ["越", "鸟", "从", "南", "来", "胡", "鹰", "亦", "北", "度"],
            ["旧", "户", "闲", "花", "草", "驯", "鸽", "傍", "檐", "隙"],
            ["狗", "吠", "深", "巷", "中", "鸡", "鸣", "桑", "树", "颠"],
            ["烽", "火", "连", "三", "月", "家", "书", "抵", "万", "金"],
            ["石", "角", "恣", "幽", "步", "长", "乌", "遂", "遐", "征"],
            ["自", "倚", "能", "歌", "日", "先", "皇", "掌", "上", "怜"],
            ["控", "弦", "破", "左", "的", "右", "发", "摧", "月", "支"],
            ["嗟", "余", "有", "两", "耳", "未", "省", "听", "丝", "篁"],
            ["小", "桥", "流", "水", "人", "家", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // ZhCnAltC2
    Layout::new(
        "<翻页>",
        [
            ["知", "音", "者", "诚", "希", "念", "子", "不", "能", "别"],
            ["义", "公", "习", "禅", "寂", "结", "宇", "依", "空", "林"],
            ["山", "阴", "遇", "羽", "客", "爱", "此", "好", "鹅", "宾"],
            ["潜", "身", "猫", "相", "雀", "引", "喙", "禽", "呼", "偶"],
            ["绕", "堤", "龙", "骨", "冷", "拂", "岸", "鸭", "头", "香"],
            ["昨", "日", "登", "高", "罢", "今", "朝", "更", "举", "觞"],
            ["吴", "江", "赋", "鹦", "鹉", "落", "笔", "超", "群", "英"],
            ["清", "水", "出", "芙", "蓉", "天", "然", "去", "雕", "饰"],
            ["枯", "藤", "老", "树", "昏", "鸦", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // ZhTw1
    Layout::new(
        "<翻頁>",
        [
            ["泉", "聲", "咽", "危", "石", "日", "色", "冷", "青", "松"],
            ["薄", "暮", "空", "潭", "曲", "安", "禪", "制", "毒", "龍"],
            ["海", "內", "存", "知", "己", "天", "涯", "若", "比", "鄰"],
            ["滿", "階", "芳", "草", "綠", "一", "片", "杏", "花", "香"],
            ["恨", "無", "千", "日", "酒", "空", "斷", "九", "迴", "腸"],
            ["當", "路", "誰", "相", "假", "知", "音", "世", "所", "稀"],
            ["只", "應", "守", "寂", "寞", "還", "掩", "故", "園", "扉"],
            ["坐", "觀", "垂", "釣", "者", "－", "～", "’", "＝", "☆"],
            ["徒", "有", "羨", "魚", "情", "的", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // ZhTw2
    Layout::new(
        "<前頁>",
        [
            ["幾", "行", "歸", "塞", "盡", "念", "爾", "獨", "何", "之"],
            ["暮", "雨", "相", "呼", "失", "寒", "塘", "欲", "下", "遲"],
            ["霞", "光", "連", "碧", "彩", "湖", "岸", "水", "連", "灘"],
            ["天", "地", "丹", "青", "繪", "人", "間", "錦", "秀", "看"],
            ["返", "景", "入", "深", "林", "復", "照", "青", "苔", "上"],
            ["中", "歲", "頗", "好", "道", "晚", "家", "南", "山", "睡"],
            ["興", "來", "每", "獨", "往", "勝", "事", "空", "自", "知"],
            ["遙", "夜", "泛", "清", "瑟", "－", "～", "’", "＝", "☆"],
            ["西", "風", "生", "翠", "蘿", "的", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // ZhTwAlt1
    Layout::new(
        "<頁１>",
        [
            ["Ａ", "Ｂ", "Ｃ", "Ｄ", "Ｅ", "Ｆ", "Ｇ", "Ｈ", "Ｉ", "Ｊ"],
            ["Ｋ", "Ｌ", "Ｍ", "Ｎ", "Ｏ", "Ｐ", "Ｑ", "Ｒ", "Ｓ", "Ｔ"],
            ["Ｕ", "Ｖ", "Ｗ", "Ｘ", "Ｙ", "Ｚ", "ａ", "ｂ", "ｃ", "ｄ"],
            ["ｅ", "ｆ", "ｇ", "ｈ", "ｉ", "ｊ", "ｋ", "ｌ", "ｍ", "ｎ"],
            ["ｏ", "ｐ", "ｑ", "ｒ", "ｓ", "ｔ", "ｕ", "ｖ", "ｗ", "ｘ"],
            ["ｙ", "ｚ", "子", "力", "小", "大", "天", "中", "太", "夫"],
            ["月", "幻", "日", "毛", "文", "古", "艾", "白", "玉", "世"],
            ["冬", "加", "卡", "平", "多", "巧", "弗", "米", "西", "安"],
            ["伊", "亨", "克", "里", "坎", "阿", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // ZhTwAlt2
    Layout::new(
        "<頁２>",
        [
            ["貝", "利", "芙", "芬", "拉", "欣", "東", "雨", "依", "武"],
            ["秀", "金", "耶", "肯", "青", "法", "奇", "皇", "宜", "兒"],
            ["昂", "哈", "思", "紅", "香", "茱", "美", "南", "威", "珍"],
            ["迪", "風", "哥", "席", "真", "修", "恩", "倫", "格", "亞"],
            ["海", "特", "夏", "娜", "莉", "球", "彩", "菲", "雪", "飛"],
            ["萊", "梅", "琴", "凱", "斯", "晴", "黑", "絲", "塔", "葛"],
            ["葉", "斐", "雅", "瑟", "瑞", "雷", "豪", "維", "赫", "爾"],
            ["德", "蓮", "瑪", "嘉", "歐", "蕾", "龍", "瓊", "黛", "藍"],
            ["薩", "蘇", "寶", "羅", "麗", "蘭", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // RuCyrl (Belarusian and Ukrainian letters in the last row)
    Layout::new(
        "<Абвг>",
        [
            ["А", "Б", "В", "Г", "Д", "а", "б", "в", "г", "д"],
            ["Е", "Ё", "Ж", "З", "И", "е", "ё", "ж", "з", "и"],
            ["Й", "К", "Л", "М", "Н", "й", "к", "л", "м", "н"],
            ["О", "П", "Р", "С", "Т", "о", "п", "р", "с", "т"],
            ["У", "Ф", "Х", "Ц", "Ч", "у", "ф", "х", "ц", "ч"],
            ["Ш", "Щ", "Ъ", "Ы", "Ь", "ш", "щ", "ъ", "ы", "ь"],
            ["Э", "Ю", "Я", "", "", "э", "ю", "я", "", ""],
            ["Ґ", "Є", "І", "Ї", "Ў", "ґ", "є", "і", "ї", "ў"],
            ["ʼ", "", "", "", "", "", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // Letter
    Layout::new(
        "<Abcd>",
        [
            ["A", "B", "C", "D", "E", "a", "b", "c", "d", "e"],
            ["F", "G", "H", "I", "J", "f", "g", "h", "i", "j"],
            ["K", "L", "M", "N", "O", "k", "l", "m", "n", "o"],
            ["P", "Q", "R", "S", "T", "p", "q", "r", "s", "t"],
            ["U", "V", "W", "X", "Y", "u", "v", "w", "x", "y"],
            ["Z", "", "", "", "", "z", "", "", "", ""],
            ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],
            [SPACE, "", "", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // Symbol (ExFont glyph codes)
    Layout::new(
        "<$A$B>",
        [
            ["$A", "$B", "$C", "$D", "$E", "$a", "$b", "$c", "$d", "$e"],
            ["$F", "$G", "$H", "$I", "$J", "$f", "$g", "$h", "$i", "$j"],
            ["$K", "$L", "$M", "$N", "$O", "$k", "$l", "$m", "$n", "$o"],
            ["$P", "$Q", "$R", "$S", "$T", "$p", "$q", "$r", "$s", "$t"],
            ["$U", "$V", "$W", "$X", "$Y", "$u", "$v", "$w", "$x", "$y"],
            ["$Z", "", "", "", "", "$z", "", "", "", ""],
            ["", "", "", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", "", "", "", ""],
            ["", "", "", "", "", "", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // LetterEn
    Layout::new(
        "<Letter>",
        [
            ["A", "B", "C", "D", "E", "a", "b", "c", "d", "e"],
            ["F", "G", "H", "I", "J", "f", "g", "h", "i", "j"],
            ["K", "L", "M", "N", "O", "k", "l", "m", "n", "o"],
            ["P", "Q", "R", "S", "T", "p", "q", "r", "s", "t"],
            ["U", "V", "W", "X", "Y", "u", "v", "w", "x", "y"],
            ["Z", " ", " ", " ", " ", "z", " ", " ", " ", " "],
            ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],
            ["", "", "", " ", " ", " ", " ", " ", " ", " "],
            [" ", " ", " ", " ", " ", " ", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // SymbolEn
    Layout::new(
        "<Symbol>",
        [
            ["!", "?", ",", ".", "/", "$F", "$G", "$H", "$I", "$J"],
            [":", ";", "(", ")", "@", "$K", "$L", "$M", "$N", " "],
            ["[", "]", "{", "}", "*", "$O", "$P", "$Q", "$R", "$S"],
            ["+", "-", "^", "%", "#", "$T", "$U", "$V", "$W", "$X"],
            ["`", "~", "\"", "'", "=", "$Y", "$Z", " ", " ", " "],
            ["&", "|", "_", "\\", " ", "$C", "$o", "$a", "$b", "$c"],
            ["$s", "$t", "$u", "$v", " ", "$D", "$E", "$p", "$q", "$r"],
            ["$w", "$x", "$y", "$z", " ", " ", " ", " ", " ", " "],
            [" ", " ", " ", " ", " ", " ", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // Letter2k3
    Layout::new(
        "<Norm>",
        [
            ["A", "B", "C", "D", "E", "a", "b", "c", "d", "e"],
            ["F", "G", "H", "I", "J", "f", "g", "h", "i", "j"],
            ["K", "L", "M", "N", "O", "k", "l", "m", "n", "o"],
            ["P", "Q", "R", "S", "T", "p", "q", "r", "s", "t"],
            ["U", "V", "W", "X", "Y", "u", "v", "w", "x", "y"],
            ["Z", " ", " ", " ", " ", "z", " ", " ", " ", " "],
            ["0", "1", "2", "3", "4", "é", "è", "ê", "ë", "à"],
            ["5", "6", "7", "8", "9", "â", "ä", "ç", "ï", "î"],
            [" ", " ", " ", " ", " ", " ", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // Symbol2k3
    Layout::new(
        "<Spec>",
        [
            ["!", "?", ",", ".", "/", "$F", "$G", "$H", "$I", "$J"],
            [":", ";", "(", ")", "@", "$K", "$L", "$M", "$N", " "],
            ["[", "]", "{", "}", "*", "$O", "$P", "$Q", "$R", "$S"],
            ["+", "-", "^", "%", "#", "$T", "$U", "$V", "$W", "$X"],
            ["`", "~", "\"", "'", "=", "$Y", "$Z", " ", " ", " "],
            ["&", "|", "_", "\\", " ", "$C", "$o", "$a", "$b", "$c"],
            ["$s", "$t", "$u", "$v", " ", "$D", "$E", "$p", "$q", "$r"],
            ["$w", "$x", "$y", "$z", " ", "â", "ä", "ç", "ï", "î"],
            [" ", " ", " ", " ", " ", " ", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // LetterEs
    Layout::new(
        "<Norm>",
        [
            ["A", "B", "C", "D", "E", "a", "b", "c", "d", "e"],
            ["F", "G", "H", "I", "J", "f", "g", "h", "i", "j"],
            ["K", "L", "M", "N", "O", "k", "l", "m", "n", "o"],
            ["P", "Q", "R", "S", "T", "p", "q", "r", "s", "t"],
            ["U", "V", "W", "X", "Y", "u", "v", "w", "x", "y"],
            ["Z", " ", "Ñ", " ", "Ü", "z", " ", "ñ", " ", "ü"],
            ["Á", "É", "Í", "Ó", "Ú", "á", "é", "í", "ó", "ú"],
            ["1", "2", "3", "4", "5", " ", " ", " ", " ", " "],
            ["6", "7", "8", "9", "0", " ", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // SymbolEs
    Layout::new(
        "<Símb>",
        [
            ["$A", "$B", "$C", "$D", "$E", "$a", "$b", "$c", "$d", "$e"],
            ["$F", "$G", "$H", "$I", " ", "$f", "$g", "$h", "$i", "$n"],
            ["$J", "$K", "$L", "$M", "$N", "$j", "$k", "$l", "$m", "$o"],
            ["$O", "$P", "$Q", "$R", " ", " ", "$z", "$s", "$w", "$p"],
            ["$S", "$T", "$U", "$V", " ", " ", "$v", " ", "$t", "$q"],
            ["$W", "$X", "$Y", "$Z", " ", " ", "$y", "$u", "$x", "$r"],
            ["\\", "|", "'", "`", "^", "-", "[", "]", "{", "}"],
            ["_", "¬", "$", "#", "@", " ", " ", " ", " ", " "],
            ["!", "&", "?", "*", "/", " ", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // Letter2ke
    Layout::new(
        "<ABC>",
        [
            ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"],
            ["K", "L", "M", "N", "O", "P", "Q", "R", "S", "T"],
            ["U", "V", "W", "X", "Y", "Z", "(", ")", "~", "="],
            ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"],
            ["k", "l", "m", "n", "o", "p", "q", "r", "s", "t"],
            ["u", "v", "w", "x", "y", "z", ":", ";", "!", "?"],
            ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"],
            ["\"", "@", "+", "&", "/", ".", ",", "-", "'", "_"],
            ["|", "[", "]", "?", "°", " ", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // Letter2k3e (~ and = swapped against 2ke, * in place of the second ?)
    Layout::new(
        "<ABC>",
        [
            ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"],
            ["K", "L", "M", "N", "O", "P", "Q", "R", "S", "T"],
            ["U", "V", "W", "X", "Y", "Z", "(", ")", "=", "~"],
            ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"],
            ["k", "l", "m", "n", "o", "p", "q", "r", "s", "t"],
            ["u", "v", "w", "x", "y", "z", ":", ";", "!", "?"],
            ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"],
            ["\"", "*", "+", "&", "/", ".", ",", "-", "'", "_"],
            ["|", "[", "]", "@", "°", " ", NEXT_PAGE, "", DONE, ""],
        ],
    ),
    // Symbol2ke
    Layout::new(
        "<Sym>",
        [
            ["À", "Á", "Â", "Ã", "Ä", "Å", "ƒ", "Æ", "Ç", "È"],
            ["É", "Ê", "Ë", "Ì", "Í", "Î", "Ï", "Ð", "Ñ", "Ò"],
            ["Ó", "Ô", "Õ", "Ö", "©", "Ø", "Ù", "Ú", "Û", "Ü"],
            ["Ý", "Þ", "ß", "{", "}", "•", "§", "€", "£", "¥"],
            ["à", "á", "â", "ã", "ä", "å", "¸", "æ", "ç", "è"],
            ["é", "ê", "ë", "ì", "í", "î", "ï", "ð", "ñ", "ò"],
            ["ó", "ô", "õ", "ö", "®", "ø", "ù", "ú", "û", "ü"],
            ["ý", "þ", "ÿ", "¿", "¡", ".", ",", "-", "'", "_"],
            ["†", "‡", "%", "…", "μ", " ", NEXT_PAGE, "", DONE, ""],
        ],
    ),
];
