//! Markup fragments that make up the ENT page.

/// Document head: doctype, `<head>` block and the opening `<body>` tag.
pub const HEAD: &str = r##"<!doctype html>
<html lang="fr">
<head>
  <meta charset="utf-8">
  <title>CAS - Central Authentication Service Connexion</title>
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link rel="stylesheet" href="style.css">
  <script src="kpi.js" defer></script>
</head>
<body class="auth-body">
"##;

/// Page banner: portal menu, logo and tagline.
pub const TOP_HEADER: &str = r##"  <header role="banner">
    <div class="top_header">
      <div class="container">
        <div class="menu_top_header">
          <span><a href="#" class="hidden_md">Università di corsica</a><span class="hidden_md">&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;|&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;</span><label for="nosportails_menu" class="nosportails">Nos Portails &nbsp;&nbsp;:</label></span>
          <input type="checkbox" id="nosportails_menu">
                                                                                                                                                                                                      pro</a></li>
            <li><a href="#">Fondation</a></li>
          </ul>
        </div>
      </div>
    </div>

    <div class="bottom_header">
      <div class="container">
        <a href="#" class="logo"><img src="logo.png" alt="logo"></a>
        <div class="baseline">Authentification | <span>Campus numérique</span></div>
      </div>
    </div>
    <div class="clear"></div>
  </header>
"##;
