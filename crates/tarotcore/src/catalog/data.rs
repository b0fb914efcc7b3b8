//! Static card table. Order matters: it is the order of selection keyboards.

use super::{arcana, suit, CardEntry, Category};

#[rustfmt::skip]
pub(super) static MAJOR_ARCANA: [CardEntry; 22] = [
    arcana("fool", "The Fool", Category::Major, "Innocence, freedom, originality, adventure, potential", "Recklessness, carelessness, negligence, risk-taking"),
    arcana("magician", "The Magician", Category::Major, "Power, influence, willpower, resourcefulness, manifestation", "Manipulation, greed, unused ability, trickery"),
    arcana("highpriestess", "The High Priestess", Category::Major, "Desirability, unattainability, mystery...", "Repression for intuition, blocked psychic powers..."),
    arcana("empress", "The Empress", Category::Major, "Pregnancy, fertility, motherhood...", "Insecurity, infertility, lack of confidence..."),
    arcana("emperor", "The Emperor", Category::Major, "Older man, stability, dependability...", "Abuse of power, excessively controlling..."),
    arcana("hierophant", "The Hierophant", Category::Major, "Traditional institutions, traditional values, conventional, conformity...", "Challenging tradition, unconventional lifestyles, unconventional relationships..."),
    arcana("lovers", "The Lovers", Category::Major, "Love, soulmates, kindred spirits, perfect unions...", "Disharmony, trust issues, imbalance, conflict..."),
    arcana("chariot", "The Chariot", Category::Major, "Victory, overcoming obstacles, success, ambition...", "Forcefulness, lack of direction, lack of self-control..."),
    arcana("strength", "Strength", Category::Major, "Inner strength, courage, bravery, confidence...", "Vulnerability, self-doubt, weakness, low self-esteem..."),
    arcana("hermit", "The Hermit", Category::Major, "Spiritual enlightenment, soul searching, self-reflection...", "Loneliness, paranoia, isolation, being reclusive..."),
    arcana("wheeloffortune", "Wheel of Fortune", Category::Major, "Good luck, destiny, change, karma...", "Bad luck, upheaval, disorder, external forces..."),
    arcana("justice", "Justice", Category::Major, "Justice, karmic justice, consequences, legal disputes...", "Injustice, karmic retribution, dishonesty, corruption..."),
    arcana("hangedman", "The Hanged Man", Category::Major, "Feeling trapped, confined, self-limiting, uncertainty...", "Discontentment, apathy, disinterest, stagnation..."),
    arcana("death", "Death", Category::Major, "Spiritual transformation, new beginnings, letting go...", "Inability to move forward, fear of beginnings..."),
    arcana("temperance", "Temperance", Category::Major, "Balance, peace, patience, moderation, inner calm...", "Imbalance, self-indulgence, excess, clashing..."),
    arcana("devil", "The Devil", Category::Major, "Addiction, depression, mental health issues, secrecy...", "Detachment, independence, overcoming addiction..."),
    arcana("tower", "The Tower", Category::Major, "Chaos, destruction, sudden upheaval, trauma...", "Resisting change, averting disaster, avoiding tragedy..."),
    arcana("star", "The Star", Category::Major, "Hope, inspiration, creativity, calm, contentment...", "Hopelessness, despair, focusing on the negative..."),
    arcana("moon", "The Moon", Category::Major, "Intuition, illusion, dreams, vagueness, instability...", "Releasing fear, unveiling secrets, subsiding anxiety..."),
    arcana("sun", "The Sun", Category::Major, "Positivity, freedom, fun, success, optimism...", "Lack of enthusiasm, excessive enthusiasm, sadness..."),
    arcana("judgment", "Judgment", Category::Major, "Judgment, self-evaluation, awakening, renewal...", "Indecisiveness, self-doubt, malicious gossip..."),
    arcana("world", "The World", Category::Major, "Success, achievement, accomplishment, travel...", "Lack of success, stagnation, lack of achievement..."),
];

#[rustfmt::skip]
pub(super) static CUPS: [CardEntry; 14] = [
    arcana("acecups", "Ace of Cups", Category::Cups, "New feelings, new relationships, intuition, emotional fulfillment", "Emotional loss, blocked creativity, emptiness, feeling unloved"),
    arcana("twocups", "Two of Cups", Category::Cups, "Unity, partnership, mutual attraction, connection", "Imbalance in relationship, miscommunication, tension"),
    arcana("threecups", "Three of Cups", Category::Cups, "Celebration, friendship, community, joy, gatherings", "Overindulgence, gossip, isolation, exclusion"),
    arcana("fourcups", "Four of Cups", Category::Cups, "Contemplation, apathy, reevaluation, discontent", "New perspective, acceptance, moving forward"),
    arcana("fivecups", "Five of Cups", Category::Cups, "Loss, grief, disappointment, regret, focus on the negative", "Acceptance, moving on, finding peace, forgiveness"),
    arcana("sixcups", "Six of Cups", Category::Cups, "Nostalgia, childhood memories, innocence, joy, reunion", "Stuck in the past, unrealistic memories, moving forward"),
    arcana("sevencups", "Seven of Cups", Category::Cups, "Choices, fantasy, illusion, wishful thinking, options", "Clarity, commitment, purpose, realistic choices"),
    arcana("eightcups", "Eight of Cups", Category::Cups, "Walking away, disillusionment, leaving behind, seeking truth", "Fear of change, fear of loss, staying in a bad situation"),
    arcana("ninecups", "Nine of Cups", Category::Cups, "Contentment, satisfaction, gratitude, wish fulfillment", "Dissatisfaction, greed, materialism, overindulgence"),
    arcana("tencups", "Ten of Cups", Category::Cups, "Divine love, blissful relationships, harmony, alignment", "Broken home, separation, domestic conflict, disharmony"),
    arcana("pagecups", "Page of Cups", Category::Cups, "Creative opportunities, intuitive messages, curiosity, possibility", "Emotional immaturity, creative blocks, mood swings"),
    arcana("knightcups", "Knight of Cups", Category::Cups, "Romantic, imaginative, sensitive, following one's heart", "Moodiness, disappointment, unrealistic expectations"),
    arcana("queencups", "Queen of Cups", Category::Cups, "Compassionate, caring, emotionally stable, intuitive, in flow", "Martyrdom, insecurity, giving too much, emotionally unstable"),
    arcana("kingcups", "King of Cups", Category::Cups, "Emotional balance, generosity, diplomatic, wise counsel", "Emotional manipulation, moodiness, coldness"),
];

#[rustfmt::skip]
pub(super) static WANDS: [CardEntry; 14] = [
    arcana("acewands", "Ace of Wands", Category::Wands, "Inspiration, new opportunities, growth, potential", "Delays, blocks, lack of energy, lack of passion"),
    arcana("twowands", "Two of Wands", Category::Wands, "Future planning, progress, decisions, discovery", "Fear of change, playing it safe, bad planning"),
    arcana("threewands", "Three of Wands", Category::Wands, "Expansion, foresight, overseas opportunities, preparation", "Obstacles, delays, frustration, lack of foresight"),
    arcana("fourwands", "Four of Wands", Category::Wands, "Celebration, harmony, marriage, home, community", "Lack of support, transience, home conflicts"),
    arcana("fivewands", "Five of Wands", Category::Wands, "Conflict, disagreements, competition, tension, diversity", "Conflict avoidance, tension release, compromise"),
    arcana("sixwands", "Six of Wands", Category::Wands, "Success, public recognition, progress, self-confidence", "Fall from grace, egotism, doubts, impostor syndrome"),
    arcana("sevenwands", "Seven of Wands", Category::Wands, "Challenge, competition, protection, perseverance", "Giving up, overwhelmed, self-doubt, yielding"),
    arcana("eightwands", "Eight of Wands", Category::Wands, "Speed, action, air travel, movement, quick decisions", "Delays, frustration, scattered energy, slowing down"),
    arcana("ninewands", "Nine of Wands", Category::Wands, "Resilience, courage, persistence, test of faith, boundaries", "Exhaustion, giving up, overwhelmed, defensive"),
    arcana("tenwands", "Ten of Wands", Category::Wands, "Burden, responsibility, hard work, stress, achievement", "Failure to delegate, overstressed, burned out, giving up"),
    arcana("pagewands", "Page of Wands", Category::Wands, "Exploration, excitement, freedom, adventure, potential", "Lack of direction, procrastination, hastiness"),
    arcana("knightwands", "Knight of Wands", Category::Wands, "Energy, passion, inspired action, adventure, impulsiveness", "Anger, impulsivity, recklessness, lack of direction"),
    arcana("queenwands", "Queen of Wands", Category::Wands, "Courage, confidence, independence, social butterfly, determination", "Demanding, vengeful, entitled, jealous, insecure"),
    arcana("kingwands", "King of Wands", Category::Wands, "Natural-born leader, vision, entrepreneur, honor, big picture", "Impulsive, overbearing, unachievable expectations, tyrannical"),
];

#[rustfmt::skip]
pub(super) static SWORDS: [CardEntry; 14] = [
    arcana("aceswords", "Ace of Swords", Category::Swords, "Breakthrough, clarity, sharp mind, truth, mental strength", "Confusion, brutality, chaos, misuse of power"),
    arcana("twoswords", "Two of Swords", Category::Swords, "Difficult choices, indecision, stalemate, denial, blocked emotions", "Indecision, confusion, information overload, no right choice"),
    arcana("threeswords", "Three of Swords", Category::Swords, "Heartbreak, emotional pain, sorrow, grief, hurt", "Healing, forgiveness, recovery, moving on"),
    arcana("fourswords", "Four of Swords", Category::Swords, "Rest, restoration, contemplation, recuperation, passive meditation", "Restlessness, burnout, exhaustion, stagnation"),
    arcana("fiveswords", "Five of Swords", Category::Swords, "Conflict, tension, loss, defeat, winning at all costs", "Reconciliation, making amends, past resentment"),
    arcana("sixswords", "Six of Swords", Category::Swords, "Transition, change, rite of passage, releasing baggage", "Stuck in transition, unfinished business, baggage"),
    arcana("sevenswords", "Seven of Swords", Category::Swords, "Deception, trickery, tactics, strategy, resourcefulness", "Confession, conscience, regret, exposure"),
    arcana("eightswords", "Eight of Swords", Category::Swords, "Imprisonment, entrapment, self-victimization, limiting beliefs", "Self-acceptance, new perspective, freedom, release"),
    arcana("nineswords", "Nine of Swords", Category::Swords, "Anxiety, worry, fear, depression, nightmares", "Hope, reaching out, despair, healing"),
    arcana("tenswords", "Ten of Swords", Category::Swords, "Painful endings, deep wounds, betrayal, loss, crisis", "Recovery, regeneration, resisting an inevitable end"),
    arcana("pageswords", "Page of Swords", Category::Swords, "New ideas, curiosity, thirst for knowledge, new ways of communicating", "Deception, manipulation, all talk and no action"),
    arcana("knightswords", "Knight of Swords", Category::Swords, "Action, impulsiveness, defending beliefs, swift change", "No direction, disregard for consequences, unpredictability"),
    arcana("queenswords", "Queen of Swords", Category::Swords, "Independent, unbiased judgment, clear boundaries, direct communication", "Overly emotional, easily influenced, cold, bitter"),
    arcana("kingswords", "King of Swords", Category::Swords, "Mental clarity, intellectual power, authority, truth", "Manipulation, tyranny, cold and ruthless"),
];

#[rustfmt::skip]
pub(super) static PENTACLES: [CardEntry; 14] = [
    arcana("acepentacles", "Ace of Pentacles", Category::Pentacles, "New financial opportunity, manifestation, abundance, security", "Lost opportunity, lack of planning, scarcity mindset"),
    arcana("twopentacles", "Two of Pentacles", Category::Pentacles, "Balance, adaptability, time management, prioritization", "Imbalance, disorganization, overwhelmed, juggling priorities"),
    arcana("threepentacles", "Three of Pentacles", Category::Pentacles, "Teamwork, collaboration, learning, implementation", "Lack of teamwork, disorganized, competition, lack of skill"),
    arcana("fourpentacles", "Four of Pentacles", Category::Pentacles, "Security, conservation, frugality, boundaries", "Greed, materialism, possessiveness, blocked change"),
    arcana("fivepentacles", "Five of Pentacles", Category::Pentacles, "Financial loss, poverty, lack mindset, isolation, worry", "Recovery, spiritual growth, asking for help"),
    arcana("sixpentacles", "Six of Pentacles", Category::Pentacles, "Giving, receiving, sharing wealth, generosity, charity", "Strings attached, stinginess, power and domination"),
    arcana("sevenpentacles", "Seven of Pentacles", Category::Pentacles, "Long-term view, sustainable results, perseverance, investment", "Lack of reward, unrealistic expectations, limited success"),
    arcana("eightpentacles", "Eight of Pentacles", Category::Pentacles, "Apprenticeship, repetition, mastery, skill development", "Perfectionism, no ambition, uninspired, no motivation"),
    arcana("ninepentacles", "Nine of Pentacles", Category::Pentacles, "Abundance, luxury, self-sufficiency, financial independence", "Showing off, superficial, living beyond means, financial dependence"),
    arcana("tenpentacles", "Ten of Pentacles", Category::Pentacles, "Wealth, family, establishment, retirement, ancestors", "Family disputes, bankruptcy, loss of home, financial failure"),
    arcana("pagepentacles", "Page of Pentacles", Category::Pentacles, "Manifestation, financial opportunity, skill development", "Lack of progress, procrastination, learn from failure"),
    arcana("knightpentacles", "Knight of Pentacles", Category::Pentacles, "Hard work, productivity, routine, conservatism", "Workaholic, stagnation, boredom, feeling stuck"),
    arcana("queenpentacles", "Queen of Pentacles", Category::Pentacles, "Nurturing, practical, providing financially, security", "Financial independence, self-care, work-home conflict"),
    arcana("kingpentacles", "King of Pentacles", Category::Pentacles, "Wealth, business, leadership, security, discipline, abundance", "Financially inept, obsessed with wealth, stubborn, greedy"),
];

pub(super) static SUITS: [CardEntry; 4] = [
    suit(
        "cups",
        "Cups (Water)",
        "Emotions, intuition, relationships, and love.",
        "The inner world, feelings, love, and connections with others.",
        "Compassion, imagination, emotional intelligence, empathy.",
        "Over-sensitivity, emotional overwhelm, escapism.",
    ),
    suit(
        "wands",
        "Wands (Fire)",
        "Action, passion, movement, energy.",
        "Inspiration, action, willpower, and spiritual growth.",
        "Drive, enthusiasm, confidence, leadership.",
        "Impulsiveness, burnout, arrogance, lack of direction.",
    ),
    suit(
        "swords",
        "Swords (Air)",
        "Thoughts, communication, intellect, and conflict.",
        "Mental clarity, truth, decision-making, problem solving.",
        "Logic, rationality, analytical thinking.",
        "Overthinking, harsh words, conflict, emotional detachment.",
    ),
    suit(
        "pentacles",
        "Pentacles (Earth)",
        "Finances, work, material possessions, and physical world.",
        "Practicality, stability, finances, and tangible achievements.",
        "Hard work, reliability, resourcefulness, patience.",
        "Overemphasis on materialism, stagnation, workaholism.",
    ),
];
