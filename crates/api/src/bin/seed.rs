//! One-shot database seeder for training content.
//!
//! Loads the five training modules and their quiz questions. Idempotent:
//! exits without writing when the module catalog is already present. Badges
//! and security tips ship in migrations, not here.

use cyberguard_db::models::module::CreateModule;
use cyberguard_db::models::question::CreateQuizQuestion;
use cyberguard_db::repositories::{ModuleRepo, QuestionRepo};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,cyberguard_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

    let pool = cyberguard_db::create_pool(&database_url).await?;
    cyberguard_db::run_migrations(&pool).await?;

    if ModuleRepo::exists_by_title(&pool, SEED_MODULES[0].title).await? {
        tracing::info!("Training modules already present, nothing to do");
        return Ok(());
    }

    let mut question_count = 0;
    for seed in SEED_MODULES {
        let module = ModuleRepo::create(
            &pool,
            &CreateModule {
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                category: seed.category.to_string(),
                difficulty: seed.difficulty.to_string(),
                content: seed.content.to_string(),
                estimated_minutes: seed.estimated_minutes,
                order_index: seed.order_index,
                is_active: true,
            },
        )
        .await?;

        for (index, q) in seed.questions.iter().enumerate() {
            QuestionRepo::create(
                &pool,
                &CreateQuizQuestion {
                    module_id: module.id,
                    question: q.question.to_string(),
                    options: q.options.iter().map(|s| s.to_string()).collect(),
                    correct_answer: q.correct_answer,
                    explanation: Some(q.explanation.to_string()),
                    order_index: index as i32 + 1,
                },
            )
            .await?;
            question_count += 1;
        }

        tracing::info!(module_id = module.id, title = %seed.title, "Seeded module");
    }

    tracing::info!(
        modules = SEED_MODULES.len(),
        questions = question_count,
        "Seeding complete"
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

struct SeedQuestion {
    question: &'static str,
    options: &'static [&'static str],
    correct_answer: i32,
    explanation: &'static str,
}

struct SeedModule {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    difficulty: &'static str,
    content: &'static str,
    estimated_minutes: i32,
    order_index: i32,
    questions: &'static [SeedQuestion],
}

const SEED_MODULES: &[SeedModule] = &[
    SeedModule {
        title: "Password Security Fundamentals",
        description: "Learn how to create and manage strong, secure passwords that protect your accounts from unauthorized access.",
        category: "Password Security",
        difficulty: "Beginner",
        content: r##"# Password Security Fundamentals

## Why Strong Passwords Matter
Your password is the first line of defense protecting your digital identity. Weak passwords are like leaving your front door unlocked - they make you an easy target for cybercriminals.

## Characteristics of Strong Passwords
1. **Length**: Minimum 12 characters (longer is better)
2. **Complexity**: Mix of uppercase, lowercase, numbers, and symbols
3. **Unpredictability**: Avoid dictionary words, personal info, common patterns
4. **Uniqueness**: Different password for every account

## Common Password Mistakes
- Using personal information (birthdays, names, addresses)
- Dictionary words or common phrases
- Sequential characters (123456, abcdef)
- Reusing passwords across multiple accounts
- Storing passwords in plain text

## Password Best Practices
1. Use a password manager to generate and store complex passwords
2. Enable two-factor authentication (2FA) wherever possible
3. Change passwords immediately if a breach is suspected
4. Never share passwords via email or messaging
5. Use passphrases (long, memorable phrases) for important accounts

## Password Managers
Password managers are secure vaults that:
- Generate strong, unique passwords for every account
- Auto-fill login credentials
- Sync across devices
- Alert you about breached passwords

Popular options include: Bitwarden, 1Password, LastPass, Dashlane"##,
        estimated_minutes: 15,
        order_index: 1,
        questions: &[
            SeedQuestion {
                question: "What is the recommended minimum length for a secure password?",
                options: &["6 characters", "8 characters", "12 characters", "20 characters"],
                correct_answer: 2,
                explanation: "While 8 characters was once standard, modern security best practices recommend at least 12 characters to resist brute-force attacks. Longer is always better!",
            },
            SeedQuestion {
                question: "Which of these is the WORST password practice?",
                options: &[
                    "Using a password manager",
                    "Reusing the same password across multiple accounts",
                    "Using a combination of letters, numbers, and symbols",
                    "Enabling two-factor authentication",
                ],
                correct_answer: 1,
                explanation: "Reusing passwords is extremely dangerous because if one account is compromised, all accounts using that password are at risk. Always use unique passwords for each account.",
            },
            SeedQuestion {
                question: "What is a passphrase?",
                options: &[
                    "A short complex password",
                    "A long, memorable phrase used as a password",
                    "A temporary password that expires quickly",
                    "A password hint stored in your browser",
                ],
                correct_answer: 1,
                explanation: "A passphrase is a long sequence of words or a sentence that's both secure (due to length) and memorable. Example: 'Coffee-Sunrise-Mountain-Dance-42'",
            },
            SeedQuestion {
                question: "True or False: It's safe to share passwords via email if you trust the recipient.",
                options: &["True", "False"],
                correct_answer: 1,
                explanation: "False! Email is not secure and can be intercepted. Never share passwords via email, even with trusted individuals. Use secure password sharing features in password managers instead.",
            },
            SeedQuestion {
                question: "What should you do if you suspect a password has been compromised?",
                options: &[
                    "Wait a few days to see if anything happens",
                    "Change it immediately and enable MFA",
                    "Just change the password at your next regular update",
                    "Email the company to ask if they were breached",
                ],
                correct_answer: 1,
                explanation: "Change compromised passwords immediately and enable multi-factor authentication. Acting quickly minimizes potential damage from unauthorized access.",
            },
        ],
    },
    SeedModule {
        title: "Identifying Phishing Attacks",
        description: "Recognize and avoid phishing emails, the most common method cybercriminals use to steal credentials and personal information.",
        category: "Phishing Prevention",
        difficulty: "Beginner",
        content: r##"# Identifying Phishing Attacks

## What is Phishing?
Phishing is a cyber attack where criminals impersonate legitimate organizations via email, text, or phone to trick you into revealing sensitive information or downloading malware.

## Red Flags to Watch For
1. **Suspicious Sender**: Check email address carefully - look for slight misspellings
2. **Urgency & Threats**: "Act now!" or "Account suspended" creates panic
3. **Generic Greetings**: "Dear Customer" instead of your name
4. **Spelling & Grammar Errors**: Professional companies proofread
5. **Suspicious Links**: Hover to reveal true destination before clicking
6. **Unexpected Attachments**: Never open attachments from unknown senders
7. **Requests for Personal Info**: Legitimate companies don't ask via email

## Common Phishing Tactics
- **CEO Fraud**: Impersonating executives to request urgent transfers
- **Tax Scams**: Fake IRS/government agencies demanding payment
- **Package Delivery**: Fake tracking notifications with malicious links
- **Account Verification**: Fake security alerts from banks or social media
- **Prize/Lottery Scams**: "You've won!" notifications

## How to Stay Safe
1. Verify sender identity independently (don't use contact info from suspicious email)
2. Type URLs directly instead of clicking email links
3. Enable email filtering and anti-phishing tools
4. Report phishing attempts to IT/security team
5. When in doubt, throw it out

## If You Click a Phishing Link
1. Disconnect from internet immediately
2. Run antivirus/malware scan
3. Change passwords for affected accounts
4. Enable 2FA on all accounts
5. Monitor accounts for suspicious activity
6. Report to IT security team"##,
        estimated_minutes: 20,
        order_index: 2,
        questions: &[
            SeedQuestion {
                question: "Which is a common red flag in phishing emails?",
                options: &[
                    "Professional formatting",
                    "Personalized greeting using your name",
                    "Urgent language like 'Act now or account will be suspended'",
                    "Official company logo",
                ],
                correct_answer: 2,
                explanation: "Phishing emails often create a sense of urgency to pressure you into acting without thinking. Legitimate companies rarely threaten immediate account suspension.",
            },
            SeedQuestion {
                question: "Before clicking a link in an email, you should:",
                options: &[
                    "Click it immediately if it looks legitimate",
                    "Hover over it to see the actual URL destination",
                    "Forward the email to friends to verify",
                    "Trust links from any email in your inbox",
                ],
                correct_answer: 1,
                explanation: "Always hover over links to reveal their true destination. Attackers can make link text appear legitimate while the actual URL goes to a malicious site.",
            },
            SeedQuestion {
                question: "What should you do if you accidentally click a phishing link?",
                options: &[
                    "Do nothing and hope for the best",
                    "Disconnect from internet, run antivirus, change passwords, enable MFA",
                    "Just change your password",
                    "Wait to see if anything bad happens",
                ],
                correct_answer: 1,
                explanation: "If you click a phishing link, immediately disconnect from the internet to prevent malware communication, run a security scan, change compromised passwords, and enable MFA on all accounts.",
            },
            SeedQuestion {
                question: "What is 'CEO Fraud' or 'Business Email Compromise'?",
                options: &[
                    "When a CEO gets hacked",
                    "Attackers impersonating executives to request urgent transfers",
                    "When a business email server is compromised",
                    "Fraud committed by actual CEOs",
                ],
                correct_answer: 1,
                explanation: "CEO Fraud involves attackers impersonating company executives (often via email) to trick employees into making urgent wire transfers or sharing sensitive data.",
            },
            SeedQuestion {
                question: "Legitimate companies will:",
                options: &[
                    "Ask you to verify account details via email",
                    "Request your password to fix technical issues",
                    "Never ask for sensitive information via email",
                    "Send urgent threats about account closure",
                ],
                correct_answer: 2,
                explanation: "Legitimate organizations never ask for sensitive information (passwords, SSN, credit cards) via email. If you receive such a request, it's a phishing attempt.",
            },
        ],
    },
    SeedModule {
        title: "Multi-Factor Authentication (MFA)",
        description: "Understand how MFA adds an extra layer of security beyond passwords, dramatically reducing the risk of account compromise.",
        category: "Authentication",
        difficulty: "Intermediate",
        content: r##"# Multi-Factor Authentication (MFA)

## What is MFA?
Multi-Factor Authentication requires two or more verification factors to access an account, making it exponentially harder for attackers to gain unauthorized access.

## The Three Factors
1. **Something You Know**: Password, PIN, security questions
2. **Something You Have**: Phone, security key, smart card
3. **Something You Are**: Fingerprint, face scan, voice recognition

## Types of MFA
- **SMS/Text Codes**: Receive one-time code via text (least secure)
- **Authenticator Apps**: TOTP codes from Google Authenticator, Authy
- **Push Notifications**: Approve login from mobile app
- **Hardware Security Keys**: Physical USB/NFC devices (most secure)
- **Biometrics**: Fingerprint, facial recognition

## Why MFA Matters
Even if your password is compromised, MFA prevents unauthorized access. Studies show MFA blocks 99.9% of automated attacks.

## MFA Best Practices
1. Enable MFA on all important accounts (email, banking, work)
2. Use authenticator apps over SMS when possible
3. Keep backup codes in a secure location
4. Register multiple devices as backup
5. Review and update MFA settings regularly

## Common MFA Mistakes
- Using SMS-based MFA (vulnerable to SIM swapping)
- Not setting up backup methods
- Approving push notifications without verifying the login attempt
- Sharing MFA codes with others"##,
        estimated_minutes: 18,
        order_index: 3,
        questions: &[
            SeedQuestion {
                question: "Which MFA method is considered MOST secure?",
                options: &[
                    "SMS text codes",
                    "Email verification",
                    "Hardware security keys (YubiKey, etc.)",
                    "Security questions",
                ],
                correct_answer: 2,
                explanation: "Hardware security keys are the most secure MFA method because they're physical devices immune to phishing, interception, and remote attacks. SMS is vulnerable to SIM swapping.",
            },
            SeedQuestion {
                question: "What are the three factors in multi-factor authentication?",
                options: &[
                    "Password, username, and email",
                    "Something you know, something you have, something you are",
                    "Phone, computer, and tablet",
                    "PIN, password, and passphrase",
                ],
                correct_answer: 1,
                explanation: "The three factors are: something you know (password), something you have (phone/security key), and something you are (biometric like fingerprint).",
            },
            SeedQuestion {
                question: "Why is SMS-based MFA considered less secure?",
                options: &[
                    "It's too convenient",
                    "Vulnerable to SIM swapping attacks",
                    "Messages arrive too slowly",
                    "It costs money",
                ],
                correct_answer: 1,
                explanation: "SMS MFA is vulnerable to SIM swapping, where attackers convince phone carriers to transfer your number to their device, allowing them to receive your codes.",
            },
            SeedQuestion {
                question: "What should you do with MFA backup codes?",
                options: &[
                    "Delete them for security",
                    "Email them to yourself",
                    "Store them securely offline (safe, password manager)",
                    "Share them with IT department",
                ],
                correct_answer: 2,
                explanation: "Backup codes should be stored securely offline (in a safe or password manager's secure notes) so you can regain access if you lose your primary MFA device.",
            },
            SeedQuestion {
                question: "MFA effectiveness: Studies show MFA can block approximately what percentage of automated attacks?",
                options: &["50%", "75%", "90%", "99.9%"],
                correct_answer: 3,
                explanation: "Microsoft research shows that MFA blocks approximately 99.9% of automated attacks, making it one of the most effective security measures you can implement.",
            },
        ],
    },
    SeedModule {
        title: "Social Engineering Awareness",
        description: "Learn to recognize manipulation tactics used by attackers to exploit human psychology and bypass technical security controls.",
        category: "Social Engineering",
        difficulty: "Intermediate",
        content: r##"# Social Engineering Awareness

## What is Social Engineering?
Social engineering exploits human psychology rather than technical vulnerabilities. Attackers manipulate people into breaking security protocols or divulging confidential information.

## Common Social Engineering Techniques

### Pretexting
Creating a fabricated scenario to obtain information. Example: Caller pretends to be from IT support needing your password.

### Phishing
Fraudulent emails/messages appearing to be from trusted sources. Covered in detail in the Phishing module.

### Baiting
Offering something enticing to trick victims. Example: Infected USB drives labeled "Confidential - Employee Salaries" left in parking lot.

### Quid Pro Quo
Offering a service in exchange for information. Example: Fake tech support offering to fix a non-existent problem.

### Tailgating
Following authorized personnel into restricted areas without proper credentials.

### Vishing (Voice Phishing)
Phone-based social engineering. Example: Caller claims to be from your bank's fraud department.

## Warning Signs
1. Requests for sensitive information
2. Creating urgency or fear
3. Offering help you didn't request
4. Too good to be true offers
5. Requests to bypass normal procedures
6. Flattery or authority intimidation

## Protection Strategies
1. **Verify Identity**: Independently confirm who you're communicating with
2. **Follow Protocols**: Don't bypass security procedures
3. **Question Unusual Requests**: Trust your instincts
4. **Limit Information Sharing**: Share only what's necessary
5. **Report Suspicious Activity**: Alert security team immediately
6. **Stay Educated**: Attackers constantly evolve tactics"##,
        estimated_minutes: 22,
        order_index: 4,
        questions: &[
            SeedQuestion {
                question: "What is pretexting in social engineering?",
                options: &[
                    "Sending text messages to victims",
                    "Creating a fabricated scenario to obtain information",
                    "Predicting security vulnerabilities",
                    "Testing security before implementing it",
                ],
                correct_answer: 1,
                explanation: "Pretexting involves creating a convincing fabricated scenario (pretext) to trick victims into providing information. Example: impersonating IT support to get passwords.",
            },
            SeedQuestion {
                question: "What is 'tailgating' in physical security?",
                options: &[
                    "Following someone's car too closely",
                    "Following authorized personnel into restricted areas without credentials",
                    "Monitoring someone's online activity",
                    "Copying someone's work",
                ],
                correct_answer: 1,
                explanation: "Tailgating is when an unauthorized person follows an authorized person into a restricted area without using their own credentials, exploiting courtesy and trust.",
            },
            SeedQuestion {
                question: "Someone calls claiming to be from IT and asks for your password to 'fix a problem.' What should you do?",
                options: &[
                    "Give them the password since they're from IT",
                    "Refuse and independently verify by calling IT through official channels",
                    "Give them a fake password to test them",
                    "Ask them to prove their identity by telling you your password",
                ],
                correct_answer: 1,
                explanation: "Never give passwords over the phone. Legitimate IT never asks for passwords. Independently verify the caller's identity using official contact information, not numbers they provide.",
            },
            SeedQuestion {
                question: "What is 'vishing'?",
                options: &[
                    "Visual phishing using fake websites",
                    "Voice phishing conducted over the phone",
                    "Phishing targeting VIPs",
                    "Phishing using video calls",
                ],
                correct_answer: 1,
                explanation: "Vishing (voice phishing) uses phone calls to trick victims into revealing sensitive information, often impersonating banks, government agencies, or tech support.",
            },
            SeedQuestion {
                question: "An email offers you a $500 gift card for completing a short survey. This is likely:",
                options: &[
                    "A legitimate marketing promotion",
                    "Baiting - a social engineering tactic",
                    "A reward for being a loyal customer",
                    "Safe if it comes from a known email address",
                ],
                correct_answer: 1,
                explanation: "This is baiting - offering something enticing to lure victims. The 'survey' likely harvests personal information or installs malware. If it seems too good to be true, it probably is.",
            },
        ],
    },
    SeedModule {
        title: "Data Privacy & Protection",
        description: "Understand the importance of protecting personal and organizational data, and learn practical steps to safeguard sensitive information.",
        category: "Data Privacy",
        difficulty: "Beginner",
        content: r##"# Data Privacy & Protection

## What is Data Privacy?
Data privacy is the right to control how your personal information is collected, used, and shared. In today's digital world, protecting data is crucial for both individuals and organizations.

## Types of Sensitive Data
- **Personal Identifiable Information (PII)**: Name, address, SSN, DOB
- **Financial Data**: Credit cards, bank accounts, tax information
- **Health Information**: Medical records, insurance details
- **Credentials**: Usernames, passwords, API keys
- **Proprietary Information**: Trade secrets, business strategies

## Data Protection Principles
1. **Minimize Collection**: Only collect necessary data
2. **Secure Storage**: Encrypt sensitive data at rest
3. **Secure Transmission**: Use HTTPS/TLS for data in transit
4. **Access Control**: Limit access to authorized personnel only
5. **Regular Disposal**: Securely delete data when no longer needed

## Privacy Laws & Regulations
- **GDPR** (EU): General Data Protection Regulation
- **CCPA** (California): California Consumer Privacy Act
- **HIPAA** (US Healthcare): Health Insurance Portability and Accountability Act
- **PCI DSS**: Payment Card Industry Data Security Standard

## Best Practices
1. Use encryption for sensitive files and communications
2. Implement strong access controls and authentication
3. Regularly update privacy settings on apps and services
4. Be cautious about what you share on social media
5. Use secure deletion methods for sensitive files
6. Review app permissions and remove unnecessary access
7. Use VPNs on public WiFi networks

## Data Breach Response
If your data is compromised:
1. Change affected passwords immediately
2. Enable MFA on all accounts
3. Monitor financial accounts for fraud
4. Consider credit freeze or fraud alerts
5. Report to appropriate authorities
6. Document the incident"##,
        estimated_minutes: 20,
        order_index: 5,
        questions: &[
            SeedQuestion {
                question: "What does PII stand for?",
                options: &[
                    "Personal Internet Information",
                    "Private Identity Index",
                    "Personally Identifiable Information",
                    "Protected Individual Items",
                ],
                correct_answer: 2,
                explanation: "PII stands for Personally Identifiable Information - any data that can be used to identify an individual, such as name, SSN, address, or email.",
            },
            SeedQuestion {
                question: "Which is a data protection best practice?",
                options: &[
                    "Collect as much data as possible",
                    "Only collect data that is necessary",
                    "Share data freely within the organization",
                    "Store all data indefinitely",
                ],
                correct_answer: 1,
                explanation: "Data minimization is a key principle - only collect data that's necessary for your purpose. Less data collected means less data to protect and less risk if breached.",
            },
            SeedQuestion {
                question: "What should you use to protect sensitive data during transmission over the internet?",
                options: &[
                    "Plain HTTP",
                    "Email without encryption",
                    "HTTPS/TLS encryption",
                    "No protection needed",
                ],
                correct_answer: 2,
                explanation: "Always use HTTPS/TLS encryption when transmitting sensitive data over the internet. This encrypts data in transit, preventing eavesdropping and interception.",
            },
            SeedQuestion {
                question: "GDPR is a privacy regulation from:",
                options: &["United States", "European Union", "China", "United Nations"],
                correct_answer: 1,
                explanation: "GDPR (General Data Protection Regulation) is the European Union's comprehensive data privacy law that protects EU citizens' personal data and privacy rights.",
            },
            SeedQuestion {
                question: "When using public WiFi, you should:",
                options: &[
                    "Avoid sensitive transactions entirely",
                    "Use a VPN to encrypt your connection",
                    "Only access HTTPS websites",
                    "All of the above",
                ],
                correct_answer: 3,
                explanation: "On public WiFi, use all precautions: avoid sensitive transactions when possible, always use a VPN to encrypt all traffic, and ensure websites use HTTPS. Public WiFi is inherently insecure.",
            },
        ],
    },
];
