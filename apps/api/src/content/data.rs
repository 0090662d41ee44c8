use super::{
    Avatar, Bio, Contact, Education, ExperienceItem, Name, PersonalInfo, Portfolio, Project,
    SkillCategory, TechnicalProficiency,
};

pub static PORTFOLIO: Portfolio = Portfolio {
    personal: PERSONAL_INFO,
    experience: EXPERIENCE,
    skills: SKILL_CATEGORIES,
    proficiency: TECHNICAL_PROFICIENCY,
    projects: PROJECTS,
};

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: Name {
        first: "Haruka",
        last: "Leonhart",
    },
    title: "Full Stack Developer",
    bio: Bio {
        short: "Building innovative web solutions with modern technologies to deliver exceptional user experiences.",
        long: &[
            "A versatile Full Stack Developer with 6+ years of experience in developing innovative, scalable web solutions. My expertise spans both frontend and backend technologies.",
            "I focus on creating seamless integration and exceptional user experiences through thoughtful design and robust implementation.",
            "With a proven ability to collaborate with cross-functional teams, I deliver impactful and user-centric products that meet business objectives while delighting users.",
        ],
    },
    contact: Contact {
        email: "harukaleonhart@gmail.com",
        phone: None,
        location: "Tokyo, Japan",
        github: "https://github.com/darkmage108",
        linkedin: None,
    },
    education: Education {
        degree: "Bachelor's in Computer Science",
        institution: "University of Tokyo",
        year: "2022",
    },
    avatar: Avatar {
        image: "img/avatar.png",
        fallback: "HL",
    },
};

pub const EXPERIENCE: &[ExperienceItem] = &[
    ExperienceItem {
        title: "Full-Stack Developer",
        company: "TechnoBridge Inc.",
        location: "Remote / Shibuya, Tokyo, Japan",
        period: "April 2022 - May 2025",
        achievements: &[
            "Developed custom SaaS platforms and web applications using React, Next.js, Node.js, and MongoDB.",
            "Led a team of developers in delivering scalable, high-performing applications.",
            "Integrated APIs, third-party services, and cloud solutions (AWS, Firebase).",
            "Engineered a microservices architecture for an e-commerce platform, improving deployment speed by 50% and enhancing system reliability using Docker, Kubernetes, and Jenkins pipelines.",
            "Enhanced Node.js application performance by 30% through code optimization and scaling infrastructure over a 6-month project, utilizing AWS and Elastic Load Balancing.",
        ],
    },
    ExperienceItem {
        title: "Frontend Developer",
        company: "Nihon Digital Works",
        location: "Remote / Osaka, Japan",
        period: "July 2020 – March 2022",
        achievements: &[
            "Developed user-friendly interfaces and experiences for mobile and web apps.",
            "Built responsive frontend applications using Vue.js, React, and Tailwind CSS.",
            "Conducted user research and usability testing to enhance app engagement.",
            "Revamped existing digital products by implementing intuitive design principles and leveraging prototyping tools like Figma and Sketch, leading to a 30% increase in user satisfaction scores.",
        ],
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend / Web",
        icon: "Monitor",
        skills: &[
            "React", "Next.js", "Remix", "TypeScript", "SPA", "SSR",
            "React Server Components", "MobX", "Redux Toolkit", "Recoil", "Zustand",
            "React Query", "Tailwind CSS", "Framer Motion", "WCAG 2.1 AA", "PWA",
        ],
    },
    SkillCategory {
        title: "Backend / AI",
        icon: "Server",
        skills: &[
            "Node.js", "Express.js", "NestJS", "Serverless (AWS Lambda)", "Python", "Flask",
            "FastAPI", "Django", "PyTorch", "TensorFlow", "Scikit-learn", "Hugging Face",
            "GraphQL", "WebSockets", "REST APIs",
        ],
    },
    SkillCategory {
        title: "Database & Storage",
        icon: "Database",
        skills: &[
            "PostgreSQL", "MySQL", "MongoDB", "Firebase", "Redis", "Elasticsearch", "Prisma",
            "TypeORM", "Sequelize",
        ],
    },
    SkillCategory {
        title: "DevOps / Cloud",
        icon: "Cloud",
        skills: &[
            "Docker", "Docker Compose", "Kubernetes", "AWS", "GCP", "Azure", "GitHub Actions",
            "GitLab CI", "Vercel", "Sentry", "LogRocket", "Grafana",
        ],
    },
    SkillCategory {
        title: "Data Visualization",
        icon: "Layers",
        skills: &[
            "D3.js", "Chart.js", "Highcharts", "Three.js", "Mapbox", "Leaflet", "React Flow",
            "Pandas", "Matplotlib", "Seaborn", "Google Analytics / GA4", "Amplitude", "Mixpanel",
        ],
    },
    SkillCategory {
        title: "Testing & Security",
        icon: "Shield",
        skills: &[
            "Jest", "React Testing Library", "Cypress", "Playwright", "ESLint", "Prettier",
            "TypeScript strict mode", "JWT", "OAuth2", "OWASP", "CSRF/XSS Prevention",
            "HTTPS / CORS",
        ],
    },
];

pub const TECHNICAL_PROFICIENCY: &[TechnicalProficiency] = &[
    TechnicalProficiency { name: "Frontend Development", percentage: 97 },
    TechnicalProficiency { name: "Backend & AI/ML", percentage: 92 },
    TechnicalProficiency { name: "Database & DevOps", percentage: 88 },
    TechnicalProficiency { name: "Testing & Security", percentage: 90 },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "NFT Marketplace – Decentralized Trading Platform",
        description: &[
            "Created a decentralized NFT marketplace with features like minting, listing, and bidding.",
            "Implemented wallet authentication, smart contract integration, and custom backend APIs using Node.js.",
            "Eliminated fragmented trading by creating a unified platform",
            "Increased trading volume by 60% through better liquidity management",
        ],
        tags: &["React", "Express.js", "Node.js", "MongoDB", "AWS"],
        image: "/img/01.png",
        github_url: None,
        live_url: None,
        featured: true,
    },
    Project {
        id: 2,
        title: "TradeFlare – Crypto Trading Platform",
        description: &[
            "Developed a scalable and responsive UI using React and Tailwind CSS, ensuring seamless performance across devices.",
            "Integrated live price updates via WebSockets, allowing users to track crypto fluctuations in real-time.",
            "Improved size prediction accuracy by 80%",
            "Enhanced user experience with interactive customization options",
        ],
        tags: &["JavaScript", "PHP", "Bootstrap", "Ruby on Rails"],
        image: "/img/05.png",
        github_url: None,
        live_url: None,
        featured: true,
    },
    Project {
        id: 3,
        title: "Black Market Crypto Platform – Anonymous Blockchain System",
        description: &[
            "Built a dark-themed crypto platform focusing on anonymous transactions and decentralized data handling.",
            "Reduced project completion time by 30% with automated workflow optimization",
            "Eliminated tool fragmentation with centralized collaboration features",
            "Improved team communication efficiency by 40%",
        ],
        tags: &["React", "Node.js", "MongoDB", "AWS"],
        image: "/img/03.png",
        github_url: None,
        live_url: None,
        featured: true,
    },
    Project {
        id: 4,
        title: "Healthcare Platform – Trusted Doctor Portal",
        description: &[
            "Reduced administrative overhead by 60% through process digitization",
            "Improved accuracy by 85% with automated verification systems",
            "Streamlined nomination workflows reducing processing time by 50%",
            "Enhanced transparency and audit trail capabilities",
        ],
        tags: &["React", ".NET", "SQL", "AWS"],
        image: "/img/04.png",
        github_url: None,
        live_url: None,
        featured: true,
    },
    Project {
        id: 5,
        title: "Pet Training App – Interactive Platform for Cat Owners",
        description: &[
            "Built a training platform for pet owners to follow interactive video guides and monitor progress.",
            "Used Firebase for authentication and content storage, Supabase for real-time data, and Stripe for secure payments.",
            "Eliminated human error in high-frequency trading operations",
            "Improved profit margins by 25% through optimized trade execution",
        ],
        tags: &["React", "Node.js", "MongoDB", "Redux", "HTML", "JavaScript"],
        image: "/img/02.png",
        github_url: None,
        live_url: None,
        featured: true,
    },
    Project {
        id: 6,
        title: "Fashion E-commerce Store – Beautiful & Modern UI",
        description: &[
            "Reduced return rates by 30% with virtual try-on system",
            "Increased customer confidence through 3D visualization",
            "Improved size prediction accuracy by 80%",
            "Enhanced user experience with interactive customization options",
        ],
        tags: &["React", "Node.js", "MongoDB"],
        image: "/img/06.png",
        github_url: None,
        live_url: None,
        featured: true,
    },
    Project {
        id: 7,
        title: "HealthDiet – AI-Powered Diet & Nutrition SaaS",
        description: &[
            "Built an AI-driven diet planning platform with personalized meal recommendations based on user health profiles.",
            "Integrated machine learning models for calorie tracking, macro analysis, and adaptive meal plan generation.",
            "Improved user health goal achievement rates by 65% through personalized AI coaching",
            "Reduced meal planning time by 80% with automated weekly schedule generation",
        ],
        tags: &["React", "Python", "TensorFlow", "Node.js", "PostgreSQL"],
        image: "/img/07.png",
        github_url: None,
        live_url: None,
        featured: true,
    },
    Project {
        id: 8,
        title: "Lumin – Online Banking & Finance SaaS Platform",
        description: &[
            "Developed a full-featured online banking dashboard with real-time transaction monitoring and budget analytics.",
            "Implemented secure payment processing, multi-currency support, and automated fraud detection using ML algorithms.",
            "Reduced fraudulent transactions by 75% through intelligent anomaly detection",
            "Increased user financial literacy by 40% with interactive spending insights",
        ],
        tags: &["Next.js", "TypeScript", ".NET", "SQL Server", "Azure"],
        image: "/img/08.png",
        github_url: None,
        live_url: None,
        featured: true,
    },
    Project {
        id: 9,
        title: "MotoX – Online Meeting & Video Conference SaaS",
        description: &[
            "Created a scalable video conferencing platform with screen sharing, virtual backgrounds, and breakout rooms.",
            "Built a WebRTC-based architecture with SFU media server for low-latency group calls supporting up to 100 participants.",
            "Achieved 99.9% call uptime with distributed media server infrastructure",
            "Reduced meeting setup time by 60% with one-click instant room creation",
        ],
        tags: &["React", "WebRTC", "Node.js", "Redis", "AWS"],
        image: "/img/09.png",
        github_url: None,
        live_url: None,
        featured: true,
    },
    Project {
        id: 10,
        title: "WhatsApp Marketing – Chatbot Automation Platform",
        description: &[
            "Designed a WhatsApp marketing automation tool with drag-and-drop chatbot builder and broadcast messaging.",
            "Integrated WhatsApp Business API with CRM systems, enabling automated lead nurturing and customer support flows.",
            "Increased client conversion rates by 55% through targeted automated campaigns",
            "Reduced customer response time by 90% with AI-powered chatbot interactions",
        ],
        tags: &["React", "Node.js", "MongoDB", "WhatsApp API", "OpenAI"],
        image: "/img/10.png",
        github_url: None,
        live_url: None,
        featured: true,
    },
];
